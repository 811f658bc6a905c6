// src/commands/mod.rs
//! Command handlers for the cookbook CLI

mod generate;

pub use generate::cmd_generate;
