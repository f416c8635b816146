//! Command resolution
//!
//! Maps a keyword, the candidate shapes of each argument and the requested
//! options onto exactly one table entry.

use crate::core::operation::Operation;
use crate::core::options::OptionSet;
use crate::core::params::{ParamShape, ShapeSet};
use crate::core::table::{CommandEntry, CommandTable};
use crate::error::{CommandError, Result};
use tracing::{debug, instrument};

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    /// Keyword as typed
    pub keyword: String,
    /// Selected operation
    pub operation: Operation,
    /// Entry defaults plus requested options
    pub options: OptionSet,
}

impl ResolvedCommand {
    pub fn description(&self) -> &'static str {
        self.operation.describe(&self.options)
    }

    /// Canonical command line for this resolution
    pub fn usage(&self, args: &[String]) -> String {
        let mut line = format!("{}{}", self.keyword, self.options.render());
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Resolves invocations against a command table
#[derive(Debug, Clone, Copy)]
pub struct CommandResolver<'a> {
    table: &'a CommandTable,
}

impl<'a> CommandResolver<'a> {
    /// Create a new resolver over the given table
    pub const fn new(table: &'a CommandTable) -> Self {
        Self { table }
    }

    /// Select the first entry matching keyword and argument shapes
    #[instrument(skip(self, args, requested), fields(arg_count = args.len()))]
    pub fn resolve(
        &self,
        keyword: &str,
        args: &[ShapeSet],
        requested: &OptionSet,
    ) -> Result<ResolvedCommand> {
        let entry = self
            .table
            .entries()
            .iter()
            .find(|entry| entry.keyword == keyword && matches_signature(entry, args))
            .ok_or_else(|| CommandError::unsupported(keyword, args.len()))?;

        debug!(
            "Resolved {} to {} ({})",
            keyword,
            entry.operation,
            entry.signature()
        );

        if let Some(option) = requested.iter().find(|o| !entry.operation.accepts(*o)) {
            return Err(CommandError::option_not_accepted(
                option.to_string(),
                entry.description(),
            ));
        }

        Ok(ResolvedCommand {
            keyword: keyword.to_string(),
            operation: entry.operation,
            options: entry.defaults.union(requested),
        })
    }
}

/// Check arity and per-argument shapes of one entry
fn matches_signature(entry: &CommandEntry, args: &[ShapeSet]) -> bool {
    let required = entry.params.len();

    if entry.is_variadic() {
        if args.len() < required {
            return false;
        }
    } else if args.len() != required {
        return false;
    }

    args.iter().enumerate().all(|(i, candidates)| {
        // extra arguments of a variadic entry all fall to its last shape
        let shape = entry
            .params
            .get(i)
            .copied()
            .unwrap_or(ParamShape::UncheckedOneOrMore);
        candidates.contains(shape)
    })
}
