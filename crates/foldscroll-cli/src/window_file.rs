//! Window descriptions loaded from TOML and overridden from flags.
//!
//! ```toml
//! line_count = 200
//! height = 40
//! decoration_rows = 1
//! scroll_off = 5
//! topline = 20
//! cursor_line = 30
//! folds = [[5, 9], [50, 80]]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

use foldscroll_core::{BufferWindow, ClosedFolds, Line, ScrollConfig, ViewState};

const DEFAULT_LINE_COUNT: usize = 100;
const DEFAULT_HEIGHT: usize = 24;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSpec {
    pub line_count: Option<usize>,
    pub height: Option<usize>,
    #[serde(default)]
    pub decoration_rows: usize,
    pub scroll_off: Option<usize>,
    pub topline: Option<Line>,
    pub cursor_line: Option<Line>,
    #[serde(default)]
    pub curswant: usize,
    #[serde(default)]
    pub folds: Vec<[Line; 2]>,
}

impl WindowSpec {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read window file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid window file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the window. Scroll-off falls back to the configured value.
    pub fn build(&self, scroll: &ScrollConfig) -> Result<BufferWindow> {
        let line_count = self.line_count.unwrap_or(DEFAULT_LINE_COUNT).max(1);
        let height = self.height.unwrap_or(DEFAULT_HEIGHT);
        let folds = ClosedFolds::from_ranges(self.folds.iter().map(|&[start, end]| (start, end)))?;

        let topline = self.topline.unwrap_or(1).clamp(1, line_count);
        let cursor = self.cursor_line.unwrap_or(topline).clamp(1, line_count);
        let view = ViewState {
            curswant: self.curswant,
            ..ViewState::default()
        }
        .with_topline(topline)
        .with_cursor(cursor, self.curswant);

        tracing::debug!(
            line_count,
            height,
            folds = folds.len(),
            topline,
            cursor,
            "Built window"
        );

        Ok(BufferWindow::new(line_count, height)
            .with_decoration_rows(self.decoration_rows)
            .with_scroll_off(self.scroll_off.unwrap_or(scroll.scroll_off))
            .with_folds(folds)
            .with_view(view))
    }
}

/// Window flags shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct WindowOverrides {
    /// Window description file (TOML)
    #[arg(short = 'w', long = "window", global = true)]
    pub file: Option<PathBuf>,

    /// Number of lines in the buffer
    #[arg(long, global = true)]
    pub line_count: Option<usize>,

    /// Window height in rows, decorations included
    #[arg(long, global = true)]
    pub height: Option<usize>,

    /// Rows used by decorations such as a winbar
    #[arg(long, global = true)]
    pub decoration_rows: Option<usize>,

    /// Scroll-off preference
    #[arg(long, global = true)]
    pub scroll_off: Option<usize>,

    /// First visible line
    #[arg(long, global = true)]
    pub topline: Option<Line>,

    /// Cursor line
    #[arg(long, global = true)]
    pub cursor_line: Option<Line>,

    /// Closed fold as START:END, may be repeated
    #[arg(long = "fold", value_parser = parse_fold, global = true)]
    pub folds: Vec<[Line; 2]>,
}

impl WindowOverrides {
    /// Merge flags over the window file (if any) and build the window
    pub fn build(&self, scroll: &ScrollConfig) -> Result<BufferWindow> {
        let mut spec = match &self.file {
            Some(path) => WindowSpec::load(path)?,
            None => WindowSpec::default(),
        };

        if self.line_count.is_some() {
            spec.line_count = self.line_count;
        }
        if self.height.is_some() {
            spec.height = self.height;
        }
        if let Some(rows) = self.decoration_rows {
            spec.decoration_rows = rows;
        }
        if self.scroll_off.is_some() {
            spec.scroll_off = self.scroll_off;
        }
        if self.topline.is_some() {
            spec.topline = self.topline;
        }
        if self.cursor_line.is_some() {
            spec.cursor_line = self.cursor_line;
        }
        spec.folds.extend(self.folds.iter().copied());

        spec.build(scroll)
    }
}

fn parse_fold(s: &str) -> std::result::Result<[Line; 2], String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got '{}'", s))?;
    let start = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid fold start '{}'", start))?;
    let end = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid fold end '{}'", end))?;
    Ok([start, end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldscroll_core::{FoldQuery, ViewAccess};

    #[test]
    fn test_parse_fold() {
        assert_eq!(parse_fold("5:9"), Ok([5, 9]));
        assert_eq!(parse_fold(" 12 : 40 "), Ok([12, 40]));
        assert!(parse_fold("5-9").is_err());
        assert!(parse_fold("a:9").is_err());
    }

    #[test]
    fn test_spec_from_toml() {
        let spec = WindowSpec::from_toml(
            r#"
            line_count = 200
            height = 41
            decoration_rows = 1
            topline = 20
            cursor_line = 30
            folds = [[5, 9], [50, 80]]
            "#,
        )
        .unwrap();
        let win = spec.build(&ScrollConfig::default()).unwrap();

        assert_eq!(win.line_count(), 200);
        assert_eq!(win.text_height(), 40);
        assert_eq!(win.view().topline, 20);
        assert_eq!(win.view().lnum, 30);
        assert_eq!(win.fold_closed_end(60), Some(80));
    }

    #[test]
    fn test_defaults_and_config_scroll_off() {
        let scroll = ScrollConfig {
            scroll_off: 3,
            ..Default::default()
        };
        let win = WindowSpec::default().build(&scroll).unwrap();
        assert_eq!(win.line_count(), DEFAULT_LINE_COUNT);
        assert_eq!(win.text_height(), DEFAULT_HEIGHT);
        assert_eq!(win.scroll_off_preference(), 3);
    }

    #[test]
    fn test_view_clamped_into_buffer() {
        let spec = WindowSpec {
            line_count: Some(10),
            topline: Some(50),
            ..Default::default()
        };
        let win = spec.build(&ScrollConfig::default()).unwrap();
        assert_eq!(win.view().topline, 10);
        assert_eq!(win.view().lnum, 10);
    }

    #[test]
    fn test_invalid_fold_rejected() {
        let spec = WindowSpec {
            folds: vec![[9, 5]],
            ..Default::default()
        };
        assert!(spec.build(&ScrollConfig::default()).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(WindowSpec::from_toml("lines = 5").is_err());
    }

    #[test]
    fn test_overrides_extend_folds() {
        let overrides = WindowOverrides {
            line_count: Some(50),
            folds: vec![[10, 20]],
            ..Default::default()
        };
        let win = overrides.build(&ScrollConfig::default()).unwrap();
        assert_eq!(win.line_count(), 50);
        assert_eq!(win.fold_closed_start(15), Some(10));
    }
}
