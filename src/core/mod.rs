//! Core command handling
//!
//! Contains the command grammar, the resolver that selects an operation for
//! a command line, argument classification, and remote failure handling.

pub mod classify;
pub mod failure;
pub mod invocation;
pub mod operation;
pub mod options;
pub mod params;
pub mod resolver;
pub mod table;

pub use classify::ArgumentClassifier;
pub use failure::{AcceptableError, Outcome, RemoteError, cleanup, is_retryable};
pub use invocation::Invocation;
pub use operation::Operation;
pub use options::{OptionFlag, OptionSet, options_help};
pub use params::{ParamShape, ShapeSet};
pub use resolver::{CommandResolver, ResolvedCommand};
pub use table::{CommandEntry, CommandTable};
