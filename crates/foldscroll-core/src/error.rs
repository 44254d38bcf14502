use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid position: line {line}, col {col} (buffer has {line_count} lines)")]
    InvalidPosition {
        line: usize,
        col: usize,
        line_count: usize,
    },

    #[error("Invalid fold: lines {start}..={end}")]
    InvalidFold { start: usize, end: usize },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
