//! Command-line argument parsing

use clap::{Parser, Subcommand};

/// bucketcmd - resolve bulk S3 transfer commands and classify remote failures
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "bucketcmd")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Number of times to retry a retryable remote failure
    #[arg(short = 'r', long, global = true, default_value_t = 10)]
    pub retries: u32,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported commands and options
    Commands,

    /// Resolve one command line, e.g. `resolve -- cp -n a.txt s3://bucket/`
    Resolve {
        /// Keyword, options and arguments
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        tokens: Vec<String>,
    },

    /// Classify a remote-store error
    Classify {
        /// Service error code (e.g. SlowDown)
        #[arg(long)]
        code: Option<String>,

        /// HTTP status of the failed request
        #[arg(long)]
        status: Option<u16>,

        /// Request id reported by the service
        #[arg(long, default_value = "")]
        request_id: String,

        /// Treat the outcome as acceptable (e.g. no-clobber skip)
        #[arg(long, conflicts_with_all = ["code", "status"])]
        acceptable: bool,

        /// Error message
        message: String,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
