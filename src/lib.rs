//! # bucketcmd
//!
//! Command resolution and failure classification for a bulk S3 transfer tool.
//! Given a keyword and its arguments, the resolver picks exactly one
//! operation from a fixed command grammar before any I/O starts. Failed remote
//! calls are classified as retryable, acceptable, or fatal.
//!
//! ## Features
//!
//! - Ordered command grammar validated at construction
//! - First-match resolution over multi-valued argument shapes
//! - Grouped help listing generated from the grammar
//! - Retry classification for remote-store errors
//!
//! ## Example
//!
//! ```no_run
//! use bucketcmd::core::{ArgumentClassifier, CommandResolver, CommandTable, OptionSet};
//!
//! let table = CommandTable::standard()?;
//! let classifier = ArgumentClassifier::new()?;
//! let args = classifier.classify_all(&["report.csv", "s3://bucket/reports/"]);
//! let resolved = CommandResolver::new(&table).resolve("cp", &args, &OptionSet::new())?;
//! println!("{}", resolved.description());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
