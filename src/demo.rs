// Shared plumbing for the driver binaries in src/bin.

use colored::Colorize;

use crate::config::{DemoConfig, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::telemetry;

/// Loads `patterns.toml` (if any), installs logging and prints the title.
pub fn start(title: &str) -> Result<DemoConfig> {
    let config = DemoConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    telemetry::init(&config);

    println!("{}", title.bold());
    println!("{}\n", "=".repeat(title.len()));
    Ok(config)
}

pub fn section(name: &str) {
    println!("{}", format!("=== {} ===", name).cyan().bold());
}

pub fn key_points(points: &[&str]) {
    println!("\n{}", "=== Key Points ===".cyan().bold());
    for (i, point) in points.iter().enumerate() {
        println!("{}. {}", i + 1, point);
    }
}
