//! Window handle used by the navigation functions, plus an in-memory model.

use crate::fold::{ClosedFolds, FoldInfo, FoldQuery};
use crate::view::{Line, ViewAccess, ViewState};
use crate::{Error, Result};

/// Everything the navigation code needs from a single window.
pub trait Window: FoldQuery + ViewAccess {}

impl<T: FoldQuery + ViewAccess + ?Sized> Window for T {}

/// Self-contained window over a buffer of `line_count` lines.
///
/// Used by the CLI and by tests; editor integrations implement
/// [`FoldQuery`] and [`ViewAccess`] on their own window types instead.
#[derive(Debug, Clone)]
pub struct BufferWindow {
    line_count: usize,
    height: usize,
    decoration_rows: usize,
    scroll_off: usize,
    view: ViewState,
    folds: ClosedFolds,
}

impl BufferWindow {
    pub fn new(line_count: usize, height: usize) -> Self {
        Self {
            line_count,
            height,
            decoration_rows: 0,
            scroll_off: 0,
            view: ViewState::default(),
            folds: ClosedFolds::new(),
        }
    }

    /// Rows taken by decorations such as a winbar.
    pub fn with_decoration_rows(mut self, rows: usize) -> Self {
        self.decoration_rows = rows;
        self
    }

    pub fn with_scroll_off(mut self, scroll_off: usize) -> Self {
        self.scroll_off = scroll_off;
        self
    }

    pub fn with_folds(mut self, folds: ClosedFolds) -> Self {
        self.folds = folds;
        self
    }

    pub fn with_view(mut self, view: ViewState) -> Self {
        self.view = view;
        self
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn folds(&self) -> &ClosedFolds {
        &self.folds
    }

    pub fn folds_mut(&mut self) -> &mut ClosedFolds {
        &mut self.folds
    }

    pub fn set_line_count(&mut self, line_count: usize) {
        self.line_count = line_count;
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    fn check_line(&self, line: Line, col: usize) -> Result<()> {
        if line == 0 || line > self.line_count {
            return Err(Error::InvalidPosition {
                line,
                col,
                line_count: self.line_count,
            });
        }
        Ok(())
    }
}

impl FoldQuery for BufferWindow {
    fn fold_info(&self, line: Line) -> FoldInfo {
        self.folds.fold_info(line)
    }

    fn fold_closed_start(&self, line: Line) -> Option<Line> {
        self.folds.fold_closed_start(line)
    }

    fn fold_closed_end(&self, line: Line) -> Option<Line> {
        self.folds.fold_closed_end(line)
    }
}

impl ViewAccess for BufferWindow {
    fn view(&self) -> ViewState {
        self.view
    }

    fn set_view(&mut self, view: ViewState) -> Result<()> {
        self.check_line(view.topline, view.leftcol)?;
        self.check_line(view.lnum, view.col)?;
        self.view = view;
        Ok(())
    }

    fn text_height(&self) -> usize {
        self.height.saturating_sub(self.decoration_rows)
    }

    fn line_count(&self) -> usize {
        self.line_count
    }

    fn scroll_off_preference(&self) -> usize {
        self.scroll_off
    }

    fn set_cursor_position(&mut self, line: Line, col: usize) -> Result<()> {
        self.check_line(line, col)?;
        self.view.lnum = line;
        self.view.col = col;
        Ok(())
    }
}
