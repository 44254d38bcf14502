use anyhow::Result;

use foldscroll_core::{effective_scroll_off, BufferWindow};

pub fn run(window: &BufferWindow) -> Result<()> {
    println!("{}", effective_scroll_off(window));
    Ok(())
}
