mod data;
mod engine;
mod models;
mod run;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    // Invalid data must never reach the screen: validate everything up front
    let dataset = data::load().context("Failed to load expense data")?;
    run::as_tui(dataset)
}
