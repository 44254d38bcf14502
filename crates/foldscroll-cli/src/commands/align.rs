use anyhow::Result;

use foldscroll_core::{align_cursor, Align, BufferWindow};

pub fn run(window: &BufferWindow, align: Align) -> Result<()> {
    let plan = align_cursor(window, align);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
