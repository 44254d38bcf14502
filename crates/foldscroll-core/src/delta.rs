//! Fold-aware line distances.
//!
//! A closed fold is drawn as a single row, so crossing it costs one hop no
//! matter how many buffer lines it hides. [`scroll_delta`] measures the
//! distance between two lines in hops and [`resolve_delta`] walks a number of
//! hops from a line, which lets an animation interpolate over hops and never
//! stop inside a fold.

use crate::fold::FoldQuery;
use crate::numeric::{clamp, round, sign};
use crate::view::{Line, ViewAccess};

/// Signed number of fold-aware hops from `line_from` to `line_to`.
///
/// `line_from` is raised to at least 1 and `line_to` lowered to at most the
/// buffer's line count. The magnitude never exceeds `|line_to - line_from|`.
pub fn scroll_delta<W>(window: &W, line_from: Line, line_to: Line) -> i64
where
    W: FoldQuery + ViewAccess + ?Sized,
{
    let from = line_from.max(1) as i64;
    let to = line_to.min(window.line_count().max(1)) as i64;

    let direction = sign(to - from);
    if direction == 0 {
        return 0;
    }

    let mut cur = from;
    let mut delta = 0;
    while (to - cur) * direction > 0 {
        let fold = window.fold_info(cur as Line);
        if fold.is_closed() {
            let edge = (if direction < 0 { fold.start } else { fold.end() }) as i64;
            tracing::trace!(
                line = cur,
                fold_start = fold.start,
                fold_lines = fold.lines,
                "Hop over closed fold"
            );
            cur = edge + direction;
        } else {
            cur += direction;
        }
        delta += direction;
    }

    delta
}

/// Line reached after `delta` fold-aware hops from `line`.
///
/// `delta` is rounded half up first, so fractional animation progress lands
/// on a single line. The result is clamped to `[1, line_count]`; a zero delta
/// returns `line` untouched.
pub fn resolve_delta<W>(window: &W, line: Line, delta: f64) -> Line
where
    W: FoldQuery + ViewAccess + ?Sized,
{
    let idelta = round(delta);
    let direction = sign(idelta);
    if direction == 0 {
        return line;
    }

    let line_count = window.line_count().max(1) as i64;
    let mut target = line as i64;
    for _ in 0..idelta.unsigned_abs() {
        // Once past an end and still heading away, every further hop clamps
        // to the same line. A stale start outside the buffer walks back in.
        if (direction > 0 && target > line_count) || (direction < 0 && target < 1) {
            break;
        }
        let edge = if direction > 0 {
            window.fold_closed_end(target as Line)
        } else {
            window.fold_closed_start(target as Line)
        };
        target = match edge {
            Some(edge) => edge as i64 + direction,
            None => target + direction,
        };
    }

    clamp(target, 1, line_count) as Line
}
