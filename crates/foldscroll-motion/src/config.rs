//! Configuration helpers for smooth scrolling
//!
//! Re-exports configuration from foldscroll-core and adds derived values.

use std::time::Duration;

pub use foldscroll_core::{EasingType, PlanOptions, ScrollConfig};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Get animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;

    /// Check if smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;

    /// Planner options carried by this config
    fn plan_options(&self) -> PlanOptions;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64).max(Duration::from_millis(1))
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0 && self.easing != EasingType::None
    }

    #[inline]
    fn plan_options(&self) -> PlanOptions {
        PlanOptions::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_duration() {
        let config = ScrollConfig {
            animation_duration_ms: 200,
            ..Default::default()
        };
        assert_eq!(config.animation_duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_tick_duration() {
        let config = ScrollConfig {
            animation_fps: 50,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(20));

        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));

        let config = ScrollConfig {
            animation_fps: 2000,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(1));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());

        config.animation_duration_ms = 100;
        config.easing = EasingType::None;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_plan_options_follow_config() {
        let config = ScrollConfig {
            stop_eof: false,
            respect_scroll_off: true,
            move_cursor: false,
            ..Default::default()
        };
        let opts = config.plan_options();
        assert!(!opts.stop_eof);
        assert!(opts.respect_scroll_off);
        assert!(!opts.move_cursor);
    }
}
