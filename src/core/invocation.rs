//! Splitting a tokenized command line into keyword, options and arguments

use crate::core::options::{OptionFlag, OptionSet};
use crate::error::{CommandError, Result};

/// A tokenized command line, before shape classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub keyword: String,
    pub options: OptionSet,
    pub args: Vec<String>,
}

impl Invocation {
    /// Leading known flags become options; everything from the first
    /// non-flag token on is an argument.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let (keyword, rest) = tokens
            .split_first()
            .ok_or_else(|| CommandError::validation("Empty command line"))?;

        let mut options = OptionSet::new();
        let mut consumed = 0;
        for token in rest {
            match OptionFlag::from_flag(token.as_ref()) {
                Some(option) => options.insert(option),
                None => break,
            }
            consumed += 1;
        }

        Ok(Self {
            keyword: keyword.as_ref().to_string(),
            options,
            args: rest[consumed..].iter().map(|t| t.as_ref().to_string()).collect(),
        })
    }
}
