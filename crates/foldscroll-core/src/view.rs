//! Window view state and the accessor the navigation code reads it through.

use serde::{Deserialize, Serialize};

use crate::Result;

/// 1-based buffer line number.
pub type Line = usize;

/// Snapshot of a window's visual position.
///
/// Navigation only reads `topline` and the cursor fields; the rest is carried
/// along so a host can save and restore the view wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// First visible buffer line
    pub topline: Line,
    /// First visible column when not wrapping
    #[serde(default)]
    pub leftcol: usize,
    /// Cursor line
    pub lnum: Line,
    /// Cursor column (0-based)
    #[serde(default)]
    pub col: usize,
    /// Virtual-edit offset past the end of the line
    #[serde(default)]
    pub coladd: usize,
    /// Preferred column for vertical motions
    #[serde(default)]
    pub curswant: usize,
    /// Screen columns skipped in the first wrapped line
    #[serde(default)]
    pub skipcol: usize,
    /// Filler lines above `topline` (diff mode)
    #[serde(default)]
    pub topfill: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            topline: 1,
            leftcol: 0,
            lnum: 1,
            col: 0,
            coladd: 0,
            curswant: 0,
            skipcol: 0,
            topfill: 0,
        }
    }
}

impl ViewState {
    pub fn with_topline(mut self, topline: Line) -> Self {
        self.topline = topline;
        self
    }

    pub fn with_cursor(mut self, lnum: Line, col: usize) -> Self {
        self.lnum = lnum;
        self.col = col;
        self
    }
}

/// Host-side accessor for one window's view and geometry.
pub trait ViewAccess {
    fn view(&self) -> ViewState;

    fn set_view(&mut self, view: ViewState) -> Result<()>;

    /// Rows available for buffer text, excluding decorations such as a winbar.
    fn text_height(&self) -> usize;

    fn line_count(&self) -> usize;

    /// Configured minimum number of lines kept around the cursor.
    fn scroll_off_preference(&self) -> usize;

    /// Move the cursor. Hosts may refuse positions they cannot apply right now.
    fn set_cursor_position(&mut self, line: Line, col: usize) -> Result<()>;
}
