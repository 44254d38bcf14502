use anyhow::Result;

use foldscroll_core::{plan_scroll, BufferWindow, PlanOptions, ScrollConfig};

use crate::amount::ScrollAmount;

pub fn run(window: &BufferWindow, amount: ScrollAmount, scroll: &ScrollConfig) -> Result<()> {
    let plan = plan_scroll(window, amount.lines(window), PlanOptions::from(scroll));
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
