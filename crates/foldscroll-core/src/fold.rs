//! Closed fold lookup.
//!
//! Two query shapes are exposed on purpose. `fold_info` reports the closed fold
//! a line belongs to together with its span, which is what the delta
//! calculator needs to jump over a whole fold. `fold_closed_start` and
//! `fold_closed_end` report the edges of the closed fold around a line, which
//! is what the resolver needs when it may already be standing inside one.

use serde::{Deserialize, Serialize};

use crate::view::Line;
use crate::{Error, Result};

/// Closed fold covering a queried line.
///
/// `start == 0` or `lines == 0` both mean "no closed fold here".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldInfo {
    pub start: Line,
    pub lines: usize,
}

impl FoldInfo {
    pub const NONE: FoldInfo = FoldInfo { start: 0, lines: 0 };

    pub fn new(start: Line, lines: usize) -> Self {
        Self { start, lines }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.start != 0 && self.lines != 0
    }

    /// Last line of the fold. Only meaningful when `is_closed()`.
    #[inline]
    pub fn end(&self) -> Line {
        self.start + self.lines.saturating_sub(1)
    }
}

/// Per-window fold queries. Implementations should answer in O(log n).
pub trait FoldQuery {
    /// Closed fold containing `line`, or [`FoldInfo::NONE`].
    fn fold_info(&self, line: Line) -> FoldInfo;

    /// First line of the closed fold containing `line`.
    fn fold_closed_start(&self, line: Line) -> Option<Line>;

    /// Last line of the closed fold containing `line`.
    fn fold_closed_end(&self, line: Line) -> Option<Line>;
}

/// Sorted, non-overlapping set of closed line ranges.
///
/// Only the outermost closed fold is visible on screen, so closing a range
/// that overlaps existing ones merges them into a single range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosedFolds {
    ranges: Vec<(Line, Line)>,
}

impl ClosedFolds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ranges<I>(ranges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Line, Line)>,
    {
        let mut folds = Self::new();
        for (start, end) in ranges {
            folds.close(start, end)?;
        }
        Ok(folds)
    }

    /// Close the inclusive range `start..=end`.
    pub fn close(&mut self, start: Line, end: Line) -> Result<()> {
        if start == 0 || end < start {
            return Err(Error::InvalidFold { start, end });
        }

        let first = self.ranges.partition_point(|&(_, e)| e < start);
        let last = self.ranges.partition_point(|&(s, _)| s <= end);

        let (mut merged_start, mut merged_end) = (start, end);
        if first < last {
            merged_start = merged_start.min(self.ranges[first].0);
            merged_end = merged_end.max(self.ranges[last - 1].1);
        }
        self.ranges
            .splice(first..last, std::iter::once((merged_start, merged_end)));

        tracing::trace!(start = merged_start, end = merged_end, "Closed fold");
        Ok(())
    }

    /// Open the closed fold containing `line`. Returns the range that was opened.
    pub fn open(&mut self, line: Line) -> Option<(Line, Line)> {
        let idx = self.index_of(line)?;
        Some(self.ranges.remove(idx))
    }

    pub fn containing(&self, line: Line) -> Option<(Line, Line)> {
        self.index_of(line).map(|idx| self.ranges[idx])
    }

    pub fn ranges(&self) -> &[(Line, Line)] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    fn index_of(&self, line: Line) -> Option<usize> {
        let idx = self.ranges.partition_point(|&(_, end)| end < line);
        match self.ranges.get(idx) {
            Some(&(start, _)) if start <= line => Some(idx),
            _ => None,
        }
    }
}

impl FoldQuery for ClosedFolds {
    fn fold_info(&self, line: Line) -> FoldInfo {
        match self.containing(line) {
            Some((start, end)) => FoldInfo::new(start, end - start + 1),
            None => FoldInfo::NONE,
        }
    }

    fn fold_closed_start(&self, line: Line) -> Option<Line> {
        self.containing(line).map(|(start, _)| start)
    }

    fn fold_closed_end(&self, line: Line) -> Option<Line> {
        self.containing(line).map(|(_, end)| end)
    }
}
