use anyhow::Result;

use foldscroll_core::{resolve_delta, BufferWindow};

pub fn run(window: &BufferWindow, line: usize, delta: f64) -> Result<()> {
    println!("{}", resolve_delta(window, line, delta));
    Ok(())
}
