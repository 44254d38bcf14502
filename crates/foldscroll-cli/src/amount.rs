//! Scroll amounts accepted on the command line.

use std::str::FromStr;

use foldscroll_core::{full_page, half_page, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAmount {
    Lines(i64),
    HalfPage { up: bool },
    Page { up: bool },
}

impl ScrollAmount {
    /// Signed row count for `window`.
    pub fn lines<W: Window + ?Sized>(&self, window: &W) -> i64 {
        match *self {
            ScrollAmount::Lines(n) => n,
            ScrollAmount::HalfPage { up } => signed(half_page(window), up),
            ScrollAmount::Page { up } => signed(full_page(window), up),
        }
    }
}

fn signed(n: i64, up: bool) -> i64 {
    if up {
        -n
    } else {
        n
    }
}

impl FromStr for ScrollAmount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (up, word) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        match word {
            "half" => Ok(ScrollAmount::HalfPage { up }),
            "page" => Ok(ScrollAmount::Page { up }),
            _ => s
                .parse::<i64>()
                .map(ScrollAmount::Lines)
                .map_err(|_| format!("expected a number, 'half' or 'page', got '{}'", s)),
        }
    }
}
