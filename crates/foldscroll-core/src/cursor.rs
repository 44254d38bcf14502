//! Best-effort cursor placement.

use crate::numeric::clamp;
use crate::view::{Line, ViewAccess};
use crate::Error;

/// Outcome of [`set_cursor`].
#[derive(Debug)]
pub enum CursorPlacement {
    Applied { line: Line, col: usize },
    /// The host refused the position; the cursor was left where it was.
    Rejected(Error),
}

impl CursorPlacement {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Place the cursor at `line`/`col`.
///
/// A missing line keeps the cursor's current line and a missing column falls
/// back to the preferred column (`curswant`). The line is clamped to the
/// buffer and the column floored at 0. A refusal from the host is reported,
/// never raised; callers that only care about the happy path can drop it.
pub fn set_cursor<W>(window: &mut W, line: Option<Line>, col: Option<i64>) -> CursorPlacement
where
    W: ViewAccess + ?Sized,
{
    let view = window.view();
    let line = clamp(
        line.unwrap_or(view.lnum),
        1,
        window.line_count().max(1),
    );
    let col = col.unwrap_or(view.curswant as i64).max(0) as usize;

    match window.set_cursor_position(line, col) {
        Ok(()) => CursorPlacement::Applied { line, col },
        Err(e) => {
            tracing::debug!(error = %e, line, col, "Cursor placement rejected");
            CursorPlacement::Rejected(e)
        }
    }
}
