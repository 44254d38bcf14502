//! Where a scroll should end before it is animated.
//!
//! The plan holds both endpoints and the fold-aware deltas between them, so a
//! driver can interpolate over hops and resolve each frame with
//! [`resolve_delta`].

use serde::Serialize;

use crate::config::ScrollConfig;
use crate::delta::{resolve_delta, scroll_delta};
use crate::margin::effective_scroll_off;
use crate::numeric::{clamp, sign};
use crate::view::Line;
use crate::window::Window;

/// Start and end of a scroll for both the view and the cursor.
///
/// Lines are stored in display form: a line inside a closed fold is replaced
/// by the fold's first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollPlan {
    pub from_topline: Line,
    pub to_topline: Line,
    pub from_cursor: Line,
    pub to_cursor: Line,
    pub topline_delta: i64,
    pub cursor_delta: i64,
}

impl ScrollPlan {
    pub fn is_noop(&self) -> bool {
        self.from_topline == self.to_topline && self.from_cursor == self.to_cursor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    /// Move the cursor along with the view
    pub move_cursor: bool,
    /// Do not scroll the last line above the bottom of the window
    pub stop_eof: bool,
    /// Keep the cursor `scroll_off` lines away from the window edges
    pub respect_scroll_off: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            move_cursor: true,
            stop_eof: true,
            respect_scroll_off: false,
        }
    }
}

impl From<&ScrollConfig> for PlanOptions {
    fn from(config: &ScrollConfig) -> Self {
        Self {
            move_cursor: config.move_cursor,
            stop_eof: config.stop_eof,
            respect_scroll_off: config.respect_scroll_off,
        }
    }
}

/// Where the cursor line should end up in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Top,
    Center,
    Bottom,
}

/// Half a window of text rows, at least one.
pub fn half_page<W: Window + ?Sized>(window: &W) -> i64 {
    (window.text_height() / 2).max(1) as i64
}

/// A full window of text rows, at least one.
pub fn full_page<W: Window + ?Sized>(window: &W) -> i64 {
    window.text_height().max(1) as i64
}

/// Plan a scroll of `lines` fold-aware rows (negative scrolls up).
pub fn plan_scroll<W: Window + ?Sized>(window: &W, lines: i64, opts: PlanOptions) -> ScrollPlan {
    let view = window.view();
    let from_topline = display_line(window, view.topline);
    let from_cursor = display_line(window, view.lnum);

    let mut target = resolve_delta(window, from_topline, lines as f64);
    if opts.stop_eof && lines > 0 {
        target = target.min(max_topline(window).max(from_topline));
    }
    let to_topline = display_line(window, target);
    let topline_delta = delta_to(window, from_topline, to_topline);

    let wanted = if !opts.move_cursor {
        from_cursor
    } else if topline_delta == 0 {
        // The view is pinned at an end of the buffer; the cursor keeps going.
        resolve_delta(window, from_cursor, lines as f64)
    } else {
        resolve_delta(window, from_cursor, topline_delta as f64)
    };
    let to_cursor = display_line(window, keep_visible(window, wanted, to_topline, opts));
    let cursor_delta = delta_to(window, from_cursor, to_cursor);

    tracing::debug!(
        lines,
        from_topline,
        to_topline,
        topline_delta,
        from_cursor,
        to_cursor,
        cursor_delta,
        "Planned scroll"
    );

    ScrollPlan {
        from_topline,
        to_topline,
        from_cursor,
        to_cursor,
        topline_delta,
        cursor_delta,
    }
}

/// Plan a view change that puts the cursor line at the top, middle or bottom
/// of the window. The cursor itself does not move.
pub fn align_cursor<W: Window + ?Sized>(window: &W, align: Align) -> ScrollPlan {
    let view = window.view();
    let from_topline = display_line(window, view.topline);
    let cursor = display_line(window, view.lnum);

    let rows_above = window.text_height().saturating_sub(1);
    let so = effective_scroll_off(window);
    let hops = match align {
        Align::Top => so,
        Align::Center => rows_above / 2,
        Align::Bottom => rows_above.saturating_sub(so),
    };

    let to_topline = display_line(window, resolve_delta(window, cursor, -(hops as f64)));
    let topline_delta = delta_to(window, from_topline, to_topline);

    ScrollPlan {
        from_topline,
        to_topline,
        from_cursor: cursor,
        to_cursor: cursor,
        topline_delta,
        cursor_delta: 0,
    }
}

/// Largest topline that still shows the last buffer line at the bottom.
pub fn max_topline<W: Window + ?Sized>(window: &W) -> Line {
    let last = display_line(window, window.line_count().max(1));
    let rows_above = window.text_height().saturating_sub(1);
    display_line(window, resolve_delta(window, last, -(rows_above as f64)))
}

/// Last buffer line shown when the view starts at `topline`.
pub fn bottom_line<W: Window + ?Sized>(window: &W, topline: Line) -> Line {
    let rows_below = window.text_height().saturating_sub(1);
    let row = resolve_delta(window, topline, rows_below as f64);
    window.fold_closed_end(row).unwrap_or(row)
}

/// First line of the closed fold around `line`, or `line` itself.
pub fn display_line<W: Window + ?Sized>(window: &W, line: Line) -> Line {
    window.fold_closed_start(line).unwrap_or(line)
}

/// Delta whose resolution from `from` lands on the row holding `to`.
///
/// Walking down enters a fold at its first line and walking up at its last
/// line, so the target is moved to that edge before measuring.
pub fn delta_to<W: Window + ?Sized>(window: &W, from: Line, to: Line) -> i64 {
    let landing = if sign(to as i64 - from as i64) < 0 {
        window.fold_closed_end(to).unwrap_or(to)
    } else {
        to
    };
    scroll_delta(window, from, landing)
}

/// Clamp `line` into the rows visible from `topline`, minus the scroll-off
/// margin when requested. The margin is dropped at the ends of the buffer.
fn keep_visible<W: Window + ?Sized>(window: &W, line: Line, topline: Line, opts: PlanOptions) -> Line {
    let bottom = bottom_line(window, topline);
    let line_count = window.line_count().max(1);

    let so = if opts.respect_scroll_off {
        effective_scroll_off(window)
    } else {
        0
    };
    let lo = if topline <= 1 {
        1
    } else {
        resolve_delta(window, topline, so as f64)
    };
    let hi = if bottom >= line_count {
        line_count
    } else {
        resolve_delta(window, display_line(window, bottom), -(so as f64))
    };

    if lo <= hi {
        clamp(line, lo, hi)
    } else {
        clamp(line, topline, bottom.max(topline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::ClosedFolds;
    use crate::view::ViewState;
    use crate::window::BufferWindow;

    fn window(line_count: usize, height: usize, folds: &[(Line, Line)]) -> BufferWindow {
        BufferWindow::new(line_count, height)
            .with_folds(ClosedFolds::from_ranges(folds.iter().copied()).unwrap())
    }

    fn at(win: BufferWindow, topline: Line, cursor: Line) -> BufferWindow {
        win.with_view(ViewState::default().with_topline(topline).with_cursor(cursor, 0))
    }

    #[test]
    fn test_page_sizes() {
        let win = window(100, 21, &[]);
        assert_eq!(half_page(&win), 10);
        assert_eq!(full_page(&win), 21);

        let empty = window(100, 0, &[]);
        assert_eq!(half_page(&empty), 1);
        assert_eq!(full_page(&empty), 1);
    }

    #[test]
    fn test_plain_scroll_moves_view_and_cursor() {
        let win = at(window(100, 10, &[]), 1, 1);
        let plan = plan_scroll(&win, 5, PlanOptions::default());
        assert_eq!(plan.to_topline, 6);
        assert_eq!(plan.to_cursor, 6);
        assert_eq!(plan.topline_delta, 5);
        assert_eq!(plan.cursor_delta, 5);
    }

    #[test]
    fn test_scroll_over_fold() {
        let win = at(window(30, 10, &[(5, 9)]), 1, 1);
        let plan = plan_scroll(&win, 5, PlanOptions::default());
        assert_eq!(plan.to_topline, 10);
        assert_eq!(plan.topline_delta, 5);
        assert_eq!(plan.to_cursor, 10);
    }

    #[test]
    fn test_scroll_up_onto_fold() {
        let win = at(window(30, 10, &[(5, 9)]), 12, 12);
        let plan = plan_scroll(&win, -3, PlanOptions::default());
        assert_eq!(plan.to_topline, 5);
        assert_eq!(plan.topline_delta, -3);
        assert_eq!(resolve_delta(&win, 12, plan.topline_delta as f64), 9);
        assert_eq!(plan.to_cursor, 5);
        assert_eq!(plan.cursor_delta, -3);
    }

    #[test]
    fn test_stop_eof() {
        let win = at(window(20, 10, &[]), 8, 8);
        assert_eq!(max_topline(&win), 11);

        let plan = plan_scroll(&win, 10, PlanOptions::default());
        assert_eq!(plan.to_topline, 11);
        assert_eq!(plan.topline_delta, 3);
        assert_eq!(plan.to_cursor, 11);

        let free = PlanOptions {
            stop_eof: false,
            ..PlanOptions::default()
        };
        assert_eq!(plan_scroll(&win, 10, free).to_topline, 18);
    }

    #[test]
    fn test_max_topline_counts_folds_as_rows() {
        let win = window(30, 10, &[(20, 25)]);
        // rows from the bottom: 30..26 (5), fold (1), 19..16 (4)
        assert_eq!(max_topline(&win), 16);
    }

    #[test]
    fn test_cursor_scrolls_alone_at_eof() {
        let win = at(window(20, 10, &[]), 11, 11);
        let plan = plan_scroll(&win, 5, PlanOptions::default());
        assert_eq!(plan.topline_delta, 0);
        assert_eq!(plan.to_topline, 11);
        assert_eq!(plan.to_cursor, 16);
    }

    #[test]
    fn test_respect_scroll_off() {
        let win = at(window(100, 10, &[]).with_scroll_off(3), 1, 1);
        let opts = PlanOptions {
            respect_scroll_off: true,
            ..PlanOptions::default()
        };
        let plan = plan_scroll(&win, 10, opts);
        assert_eq!(plan.to_topline, 11);
        assert_eq!(plan.to_cursor, 14);
    }

    #[test]
    fn test_cursor_forced_into_view_when_not_moving() {
        let win = at(window(100, 10, &[]), 1, 1);
        let opts = PlanOptions {
            move_cursor: false,
            ..PlanOptions::default()
        };
        let plan = plan_scroll(&win, 5, opts);
        assert_eq!(plan.to_topline, 6);
        assert_eq!(plan.to_cursor, 6);

        let win = at(window(100, 10, &[]), 1, 8);
        let plan = plan_scroll(&win, 5, opts);
        assert_eq!(plan.to_cursor, 8);
        assert_eq!(plan.cursor_delta, 0);
    }

    #[test]
    fn test_zero_scroll_is_noop() {
        let win = at(window(100, 10, &[]), 40, 42);
        assert!(plan_scroll(&win, 0, PlanOptions::default()).is_noop());
    }

    #[test]
    fn test_align_cursor() {
        let win = at(window(100, 10, &[]).with_scroll_off(2), 45, 50);
        assert_eq!(align_cursor(&win, Align::Top).to_topline, 48);
        assert_eq!(align_cursor(&win, Align::Center).to_topline, 46);
        assert_eq!(align_cursor(&win, Align::Bottom).to_topline, 43);

        let plan = align_cursor(&win, Align::Top);
        assert_eq!(plan.topline_delta, 3);
        assert_eq!(plan.cursor_delta, 0);
        assert_eq!(plan.to_cursor, 50);
    }

    #[test]
    fn test_align_cursor_with_fold_above() {
        let win = at(window(100, 10, &[(40, 48)]), 30, 50);
        // Four rows above the cursor: 49, the fold, 39 and 38
        assert_eq!(align_cursor(&win, Align::Center).to_topline, 38);
        let plan = align_cursor(&win, Align::Center);
        assert_eq!(plan.topline_delta, scroll_delta(&win, 30, 38));
    }

    #[test]
    fn test_align_near_top_clamps() {
        let win = at(window(100, 10, &[]), 1, 3);
        assert_eq!(align_cursor(&win, Align::Bottom).to_topline, 1);
    }
}
