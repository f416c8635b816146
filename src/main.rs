#![allow(clippy::cargo_common_metadata)]
use anyhow::{Context, Result};
use bucketcmd::{cli, config::Config, core::CommandTable, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Initialize configuration
    let config = Config::from_args(&args)?;

    // Build the command grammar once for the whole process
    let table = CommandTable::standard().context("Failed to build command table")?;

    // Execute the appropriate command
    cli::execute_command(&config, &table, &args.command)
}
