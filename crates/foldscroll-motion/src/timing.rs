//! Time calculation utilities for scroll animations

use std::time::{Duration, Instant};

/// Animation progress in [0.0, 1.0] at `now`
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete at `now`
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, -12.0, 0.25) + 3.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_midway_and_past_end() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        let half = progress(start, start + Duration::from_millis(100), duration);
        assert!((half - 0.5).abs() < 0.001);
        assert_eq!(progress(start, start + Duration::from_secs(5), duration), 1.0);
    }

    #[test]
    fn test_now_before_start() {
        let start = Instant::now() + Duration::from_millis(50);
        assert_eq!(progress(start, Instant::now(), Duration::from_millis(100)), 0.0);
        assert!(!is_complete(start, Instant::now(), Duration::from_millis(100)));
    }

    #[test]
    fn test_is_complete() {
        let start = Instant::now();
        let duration = Duration::from_millis(100);
        assert!(!is_complete(start, start + Duration::from_millis(99), duration));
        assert!(is_complete(start, start + duration, duration));
    }
}
