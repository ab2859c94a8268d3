//! MCP Cluster Tools - Entry Point
//!
//! Binary entry point for the `mct` command line tool.

use clap::Parser;
use mct::cli::{Cli, execute, load_config};
use mct_infrastructure::logging::{init_logging, log_config_loaded};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, source) = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;
    log_config_loaded(source.as_deref());

    let output = execute(&cli.command, &config)?;
    println!("{output}");
    Ok(())
}
