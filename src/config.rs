//! Configuration management
//!
//! Centralizes runtime options and provides validation.

use crate::{cli::Args, error::CommandError};
use serde::{Deserialize, Serialize};

/// Upper bound for the retry budget
const MAX_RETRIES_LIMIT: u32 = 100;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Retry configuration for remote calls
    pub retry: RetryConfig,
}

/// Retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Number of times a retryable remote call is reissued
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            retry: RetryConfig::default(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_retries: 10 }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, CommandError> {
        let config = Self {
            debug: args.debug,
            retry: RetryConfig {
                max_retries: args.retries,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CommandError> {
        if self.retry.max_retries > MAX_RETRIES_LIMIT {
            return Err(CommandError::config(format!(
                "Retry count {} exceeds the limit of {}",
                self.retry.max_retries, MAX_RETRIES_LIMIT
            )));
        }

        Ok(())
    }
}
