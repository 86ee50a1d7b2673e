// ABOUTME: Command-line scenario runner for the divided box layout engine.
// ABOUTME: Replays a TOML scenario against an in-memory host and prints the final layout as JSON.

mod scenario;

use anyhow::{Context, Result};
use scenario::Scenario;
use std::path::PathBuf;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: divbox-sim <scenario.toml>")?;

    tracing::info!("Running scenario {}", path.display());
    let scenario = Scenario::load(&path)?;
    if scenario.settings.is_none() {
        match divbox_core::EngineSettings::default_path() {
            Some(settings) => tracing::info!("Scenario has no settings, reading {}", settings.display()),
            None => tracing::info!("No config directory, using default settings"),
        }
    }
    let snapshot = scenario.run()?;

    let json = serde_json::to_string_pretty(&snapshot)?;
    println!("{json}");
    Ok(())
}
