//! The `courseval init` command.

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("courseval.toml");
    if path.exists() {
        println!("courseval.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG).context("failed to write courseval.toml")?;
        println!("Created courseval.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust or remove the limits in courseval.toml");
    println!("  2. Run: courseval");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# courseval configuration

# Capacity bounds. Delete a line to leave that bound off.
[limits]
max_courses = 10
max_evaluations_per_course = 100
"#;
