//! Command table and help rendering
//!
//! The table is the command grammar: an ordered list of keyword and shape
//! signatures. Order matters, since the resolver takes the first match, so
//! more specific signatures must come before general ones for the same
//! keyword and arity.

use crate::core::operation::Operation;
use crate::core::options::{OptionFlag, OptionSet};
use crate::core::params::ParamShape;
use crate::error::{CommandError, Result};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, instrument};

/// One row of the command grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Command keyword (`cp`, `ls`, ...)
    pub keyword: &'static str,
    /// Operation selected when this entry matches
    pub operation: Operation,
    /// Required argument shapes, in order
    pub params: Vec<ParamShape>,
    /// Options always applied for this entry
    pub defaults: OptionSet,
}

impl CommandEntry {
    /// Create a new command entry
    pub fn new(
        keyword: &'static str,
        operation: Operation,
        params: &[ParamShape],
        defaults: &[OptionFlag],
    ) -> Self {
        Self {
            keyword,
            operation,
            params: params.to_vec(),
            defaults: defaults.iter().copied().collect(),
        }
    }

    /// Whether the last shape accepts one or more arguments
    pub fn is_variadic(&self) -> bool {
        self.params.last() == Some(&ParamShape::UncheckedOneOrMore)
    }

    /// Description of the entry's operation with its defaults
    pub fn description(&self) -> &'static str {
        self.operation.describe(&self.defaults)
    }

    /// Shape signature as shown in help, e.g. `filename s3://bucket[/object[/]]`
    pub fn signature(&self) -> String {
        self.params
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Usage line: keyword, accepted options, then argument shapes
    fn usage(&self) -> String {
        let mut line = self.keyword.to_string();
        for option in self.operation.accepted_options() {
            line.push_str(" [");
            line.push_str(option.flag());
            line.push(']');
        }
        for param in &self.params {
            line.push(' ');
            line.push_str(param.label());
        }
        line.replace(" [-rr] [-ia] ", " [-rr|-ia] ")
    }
}

/// Fixed usage text replacing generated lines for some operations
fn usage_override(operation: Operation) -> Option<&'static str> {
    match operation {
        Operation::Abort => Some("exit [exit code]"),
        Operation::ShellExec => Some("! command [parameters...]"),
        _ => None,
    }
}

/// Ordered, validated command grammar
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    /// Build a table, rejecting duplicate signatures and misplaced variadic shapes
    #[instrument(skip(entries), fields(count = entries.len()))]
    pub fn new(entries: Vec<CommandEntry>) -> Result<Self> {
        let mut seen = HashSet::new();

        for entry in &entries {
            if let Some(pos) = entry
                .params
                .iter()
                .position(|p| *p == ParamShape::UncheckedOneOrMore)
            {
                if pos + 1 != entry.params.len() {
                    return Err(CommandError::invalid_signature(
                        entry.keyword,
                        format!("{} must be the last parameter", ParamShape::UncheckedOneOrMore),
                    ));
                }
            }

            if !seen.insert((entry.keyword, entry.params.clone())) {
                return Err(CommandError::duplicate_entry(entry.keyword, entry.signature()));
            }
        }

        debug!("Command table built with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// The built-in command grammar
    pub fn standard() -> Result<Self> {
        use crate::core::operation::Operation as Op;
        use crate::core::options::OptionFlag::DeleteSource;
        use crate::core::params::ParamShape::*;

        let mut entries = vec![
            CommandEntry::new("exit", Op::Abort, &[], &[]),
            CommandEntry::new("exit", Op::Abort, &[Unchecked], &[]),
        ];

        // cp and mv share signatures, mv deletes the source afterwards
        for (keyword, defaults) in [("cp", &[][..]), ("mv", &[DeleteSource][..])] {
            entries.extend([
                // File to file
                CommandEntry::new(keyword, Op::LocalCopy, &[FileObj, FileOrDir], defaults),
                CommandEntry::new(keyword, Op::BatchLocalCopy, &[Glob, Dir], defaults),
                CommandEntry::new(keyword, Op::BatchLocalCopy, &[Dir, Dir], defaults),
                // S3 to S3
                CommandEntry::new(keyword, Op::Copy, &[S3Obj, S3ObjOrDir], defaults),
                CommandEntry::new(keyword, Op::BatchCopy, &[S3WildObj, S3Dir], defaults),
                // File to S3
                CommandEntry::new(keyword, Op::Upload, &[FileObj, S3ObjOrDir], defaults),
                CommandEntry::new(keyword, Op::BatchUpload, &[Glob, S3Dir], defaults),
                CommandEntry::new(keyword, Op::BatchUpload, &[Dir, S3Dir], defaults),
                // S3 to file
                CommandEntry::new(keyword, Op::Download, &[S3Obj, FileOrDir], defaults),
                CommandEntry::new(keyword, Op::BatchDownload, &[S3WildObj, Dir], defaults),
            ]);
        }

        entries.extend([
            CommandEntry::new("rm", Op::LocalDelete, &[FileObj], &[]),
            CommandEntry::new("rm", Op::Delete, &[S3Obj], &[]),
            CommandEntry::new("rm", Op::BatchDelete, &[S3WildObj], &[]),
            CommandEntry::new("batch-rm", Op::BatchDeleteActual, &[S3Obj, UncheckedOneOrMore], &[]),
            CommandEntry::new("ls", Op::ListBuckets, &[], &[]),
            CommandEntry::new("ls", Op::List, &[S3ObjOrDir], &[]),
            CommandEntry::new("ls", Op::List, &[S3WildObj], &[]),
            CommandEntry::new("du", Op::Size, &[S3ObjOrDir], &[]),
            CommandEntry::new("du", Op::Size, &[S3WildObj], &[]),
            CommandEntry::new("!", Op::ShellExec, &[UncheckedOneOrMore], &[]),
        ]);

        Self::new(entries)
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Grouped listing of user-facing commands, sorted by description
    pub fn render_help(&self) -> String {
        let mut buckets: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        let mut overridden: HashSet<&'static str> = HashSet::new();

        for entry in self.entries.iter().filter(|e| !e.operation.is_internal()) {
            let description = entry.description();

            if let Some(text) = usage_override(entry.operation) {
                buckets.insert(description, vec![text.to_string()]);
                overridden.insert(description);
                continue;
            }
            if overridden.contains(description) {
                continue;
            }

            buckets.entry(description).or_default().push(entry.usage());
        }

        let mut out = String::new();
        for (description, lines) in &buckets {
            out.push_str("  ");
            out.push_str(description);
            out.push('\n');
            for line in lines {
                out.push_str("        ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}
