//! Fold-aware scroll animation controller
//!
//! Interpolates the number of fold-aware hops between a plan's endpoints and
//! resolves each frame back to buffer lines, so the view never starts inside a
//! closed fold on any frame.

use std::time::{Duration, Instant};

use serde::Serialize;

use foldscroll_core::{
    align_cursor, delta_to, display_line, full_page, half_page, plan_scroll, resolve_delta,
    set_cursor, Align, CursorPlacement, Line, ScrollPlan, Window,
};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Endpoints and hop counts
    plan: ScrollPlan,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Position applied to the window on one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub topline: Line,
    pub cursor: Line,
    /// True on the frame that lands on the plan's targets
    pub done: bool,
}

/// Scroll animation controller
///
/// Call one of the scroll methods to begin an animation, then `update()` each
/// frame to move the window to the interpolated position.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Configuration
    config: ScrollConfig,
    /// Pending scroll lines for batching multiple scroll events
    pending_lines: i64,
}

impl ScrollAnimator {
    /// Create a new scroll animator with configuration
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            pending_lines: 0,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Update configuration
    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there's pending work (animation or pending lines)
    /// Use this to determine if we need high frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_lines != 0
    }

    /// Plan of the running animation
    pub fn plan(&self) -> Option<&ScrollPlan> {
        self.animation.as_ref().map(|a| &a.plan)
    }

    /// Scroll by `lines` fold-aware rows (positive = down, negative = up)
    ///
    /// Multiple scroll events before the next update are batched together for
    /// smoother handling of rapid key presses.
    pub fn scroll_by<W: Window + ?Sized>(&mut self, window: &mut W, lines: i64) {
        if !self.config.is_smooth() {
            let plan = plan_scroll(window, lines, self.config.plan_options());
            apply(window, plan.to_topline, plan.to_cursor);
            self.animation = None;
            return;
        }

        self.pending_lines += lines;
    }

    /// Scroll down by one row
    pub fn scroll_down<W: Window + ?Sized>(&mut self, window: &mut W) {
        self.scroll_by(window, 1);
    }

    /// Scroll up by one row
    pub fn scroll_up<W: Window + ?Sized>(&mut self, window: &mut W) {
        self.scroll_by(window, -1);
    }

    /// Scroll down by half page
    pub fn scroll_half_page_down<W: Window + ?Sized>(&mut self, window: &mut W) {
        let lines = half_page(window);
        self.scroll_by(window, lines);
    }

    /// Scroll up by half page
    pub fn scroll_half_page_up<W: Window + ?Sized>(&mut self, window: &mut W) {
        let lines = half_page(window);
        self.scroll_by(window, -lines);
    }

    /// Scroll down by full page
    pub fn scroll_full_page_down<W: Window + ?Sized>(&mut self, window: &mut W) {
        let lines = full_page(window);
        self.scroll_by(window, lines);
    }

    /// Scroll up by full page
    pub fn scroll_full_page_up<W: Window + ?Sized>(&mut self, window: &mut W) {
        let lines = full_page(window);
        self.scroll_by(window, -lines);
    }

    /// Animate the view so the cursor line sits at the top, middle or bottom
    pub fn align<W: Window + ?Sized>(&mut self, window: &mut W, align: Align) {
        self.pending_lines = 0;
        let plan = align_cursor(window, align);
        self.start(window, plan, Instant::now());
    }

    /// Start animating `plan` at `now`
    ///
    /// Applies the plan immediately when smooth scrolling is disabled or there
    /// is nothing to animate.
    pub fn start<W: Window + ?Sized>(&mut self, window: &mut W, plan: ScrollPlan, now: Instant) {
        if !self.config.is_smooth() || plan.is_noop() {
            apply(window, plan.to_topline, plan.to_cursor);
            self.animation = None;
            return;
        }

        tracing::debug!(
            from_topline = plan.from_topline,
            to_topline = plan.to_topline,
            topline_delta = plan.topline_delta,
            cursor_delta = plan.cursor_delta,
            "Starting scroll animation"
        );

        self.animation = Some(ActiveAnimation {
            start: now,
            plan,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation to the current time
    pub fn update<W: Window + ?Sized>(&mut self, window: &mut W) -> Frame {
        self.update_at(window, Instant::now())
    }

    /// Advance the animation to `now` and move the window there
    ///
    /// Returns the frame that was applied; without an animation this is the
    /// window's current position.
    pub fn update_at<W: Window + ?Sized>(&mut self, window: &mut W, now: Instant) -> Frame {
        if self.pending_lines != 0 {
            let lines = self.remaining_hops(window) + self.pending_lines;
            self.pending_lines = 0;
            let plan = plan_scroll(window, lines, self.config.plan_options());
            self.start(window, plan, now);
        }

        let Some(anim) = self.animation.as_ref() else {
            let view = window.view();
            return Frame {
                topline: view.topline,
                cursor: view.lnum,
                done: true,
            };
        };

        let plan = anim.plan;
        if is_complete(anim.start, now, anim.duration) {
            self.animation = None;
            apply(window, plan.to_topline, plan.to_cursor);
            return Frame {
                topline: plan.to_topline,
                cursor: plan.to_cursor,
                done: true,
            };
        }

        let eased = anim.easing.apply(progress(anim.start, now, anim.duration));
        let topline = display_line(
            window,
            resolve_delta(
                window,
                plan.from_topline,
                lerp(0.0, plan.topline_delta as f64, eased),
            ),
        );
        let cursor = display_line(
            window,
            resolve_delta(
                window,
                plan.from_cursor,
                lerp(0.0, plan.cursor_delta as f64, eased),
            ),
        );
        apply(window, topline, cursor);

        Frame {
            topline,
            cursor,
            done: false,
        }
    }

    /// Cancel any active animation and stop at current position
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_lines = 0;
    }

    /// Hops between the window's current topline and the running target
    fn remaining_hops<W: Window + ?Sized>(&self, window: &W) -> i64 {
        match &self.animation {
            Some(anim) => delta_to(window, window.view().topline, anim.plan.to_topline),
            None => 0,
        }
    }
}

/// Move the window's view and cursor. Refusals are logged and skipped.
fn apply<W: Window + ?Sized>(window: &mut W, topline: Line, cursor: Line) {
    let view = window.view();
    if view.topline != topline {
        if let Err(e) = window.set_view(view.with_topline(topline)) {
            tracing::debug!(error = %e, topline, "View update rejected");
        }
    }
    if let CursorPlacement::Rejected(e) = set_cursor(window, Some(cursor), None) {
        tracing::trace!(error = %e, cursor, "Skipped cursor update for frame");
    }
}
