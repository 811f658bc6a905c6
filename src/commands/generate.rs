// src/commands/generate.rs

//! Generate command - build every page and index from the recipe records

use crate::cli::Cli;
use anyhow::{Context, Result};
use cookbook::BookConfig;
use tracing::info;

/// Load the configuration file and apply command-line overrides
pub fn resolve_config(cli: &Cli) -> Result<BookConfig> {
    let mut config = BookConfig::load(cli.config.as_deref())
        .with_context(|| "Failed to load configuration")?;

    if let Some(source) = &cli.source {
        config.paths.source = source.clone();
    }
    if let Some(output) = &cli.output {
        config.paths.output = output.clone();
    }
    if cli.equipment_links {
        config.render.equipment_links = true;
    }
    if let Some(policy) = cli.on_collision {
        config.render.on_collision = policy;
    }

    Ok(config)
}

/// Run the full generation pass
pub fn cmd_generate(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    info!(
        "Generating cookbook from {} into {}",
        config.paths.source.display(),
        config.paths.output.display()
    );

    let report = cookbook::generate(&config).with_context(|| {
        format!(
            "Failed to generate cookbook from {}",
            config.paths.source.display()
        )
    })?;

    info!(
        "Wrote {} recipe pages ({} slug collisions)",
        report.pages.len(),
        report.collisions.len()
    );

    Ok(())
}
