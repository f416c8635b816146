//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{
        AcceptableError, ArgumentClassifier, CommandResolver, CommandTable, Invocation, Outcome,
        RemoteError, cleanup, options_help,
    },
};
use anyhow::Context;
use tracing::{info, instrument, warn};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config, table))]
pub fn execute_command(
    config: &Config,
    table: &CommandTable,
    command: &Command,
) -> anyhow::Result<()> {
    match command {
        Command::Commands => execute_commands_command(table),
        Command::Resolve { tokens } => execute_resolve_command(table, tokens),
        Command::Classify {
            code,
            status,
            request_id,
            acceptable,
            message,
        } => {
            let outcome = if *acceptable {
                Outcome::Acceptable(AcceptableError::new(message.as_str()))
            } else {
                Outcome::Failure(build_remote_error(code.as_deref(), *status, request_id, message))
            };
            execute_classify_command(config, &outcome)
        }
    }
}

/// Print the command and option listings
fn execute_commands_command(table: &CommandTable) -> anyhow::Result<()> {
    print!("Commands:\n{}\nOptions:\n{}", table.render_help(), options_help());
    Ok(())
}

/// Resolve a single command line and print the selected operation
#[instrument(skip(table))]
fn execute_resolve_command(table: &CommandTable, tokens: &[String]) -> anyhow::Result<()> {
    let invocation = Invocation::parse(tokens).context("Failed to parse command line")?;

    let classifier = ArgumentClassifier::new()?;
    let shapes = classifier.classify_all(&invocation.args);

    let resolved = CommandResolver::new(table)
        .resolve(&invocation.keyword, &shapes, &invocation.options)
        .with_context(|| format!("Failed to resolve \"{}\"", tokens.join(" ")))?;

    info!("Resolved {} to {}", invocation.keyword, resolved.operation);

    println!("operation:   {}", resolved.operation);
    println!("description: {}", resolved.description());
    println!("batch:       {}", resolved.operation.is_batch());
    println!("options:    {}", resolved.options.render());
    println!("command:     {}", resolved.usage(&invocation.args));
    Ok(())
}

/// Build the remote error variant matching the supplied fields
fn build_remote_error(
    code: Option<&str>,
    status: Option<u16>,
    request_id: &str,
    message: &str,
) -> RemoteError {
    match (code, status) {
        (Some(code), Some(status)) => RemoteError::request(code, message, status, request_id),
        (Some(code), None) => RemoteError::service(code, message),
        (None, _) => RemoteError::generic(message),
    }
}

/// Report the retry verdict for an outcome
#[instrument(skip(config))]
fn execute_classify_command(config: &Config, outcome: &Outcome<()>) -> anyhow::Result<()> {
    if let Some(acceptable) = outcome.acceptable() {
        println!("verdict: acceptable (not counted as failure)");
        println!("message: {}", cleanup(acceptable));
        return Ok(());
    }

    let (code, retryable) = outcome.retry_verdict();
    if retryable {
        println!(
            "verdict: retryable ({}), up to {} attempts",
            code, config.retry.max_retries
        );
    } else {
        warn!("Remote error is not retryable");
        println!("verdict: fatal");
    }

    if let Outcome::Failure(err) = outcome {
        println!("message: {}", cleanup(err));
    }
    Ok(())
}
