//! Portfolio CLI: build-time content pipeline for the portfolio site.
//!
//! Scans the project content directory, keeps published projects, and
//! writes the static data module the site imports.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
