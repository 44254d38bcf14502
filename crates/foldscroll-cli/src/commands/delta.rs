use anyhow::Result;

use foldscroll_core::{scroll_delta, BufferWindow};

pub fn run(window: &BufferWindow, from: usize, to: usize) -> Result<()> {
    println!("{}", scroll_delta(window, from, to));
    Ok(())
}
