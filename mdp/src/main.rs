//! # MDP rollouts
//!
//! Evaluates a fixed policy on one of the bundled environments and prints
//! reward statistics. Pass `--config` to validate an agent configuration file
//! and print the option mapping it produces.

mod app;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = app::Cli::parse();
    app::run(&cli)
}
