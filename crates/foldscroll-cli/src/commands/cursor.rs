use anyhow::Result;

use foldscroll_core::{set_cursor, BufferWindow, CursorPlacement};

pub fn run(window: &mut BufferWindow, line: Option<usize>, col: Option<i64>) -> Result<()> {
    match set_cursor(window, line, col) {
        CursorPlacement::Applied { line, col } => println!("{}:{}", line, col),
        CursorPlacement::Rejected(e) => println!("rejected: {}", e),
    }
    Ok(())
}
