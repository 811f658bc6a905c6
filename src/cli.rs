// src/cli.rs
//! CLI definitions for the cookbook generator
//!
//! Running without arguments builds the book from `./data` into the current
//! directory. The command implementation is in the `commands` module.

use clap::Parser;
use cookbook::CollisionPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author = "Cookbook Contributors")]
#[command(version)]
#[command(about = "Generate cross-linked Markdown pages from YAML recipes", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./cookbook.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory containing recipe YAML files
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Directory receiving the generated documents
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// List the recipes using each item in equipment.md
    #[arg(long)]
    pub equipment_links: bool,

    /// What to do when two recipe names map to the same page
    #[arg(long, value_enum)]
    pub on_collision: Option<CollisionPolicy>,
}
