//! Command options
//!
//! Modifier flags that alter how an operation behaves, plus the
//! fixed-order options listing shown in help output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A modifier flag, either typed by the user or set by a table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionFlag {
    /// Delete source file/object after a successful copy
    DeleteSource,
    /// Run only if destination does not exist
    IfNotExists,
    /// Like `cp --parents`
    Parents,
    /// Reduced-redundancy storage class
    ReducedRedundancy,
    /// Infrequent-access storage class
    InfrequentAccess,
    /// Recursive copy/move (local)
    Recursive,
    /// Include ETags in listing
    ListEtags,
    /// Human-readable sizes (ls, du)
    HumanReadable,
}

/// Display order of the standalone options listing
const HELP_ORDER: [OptionFlag; 7] = [
    OptionFlag::IfNotExists,
    OptionFlag::Parents,
    OptionFlag::Recursive,
    OptionFlag::ReducedRedundancy,
    OptionFlag::InfrequentAccess,
    OptionFlag::ListEtags,
    OptionFlag::HumanReadable,
];

impl OptionFlag {
    /// Command-line flag for this option, empty if it has none
    pub const fn flag(self) -> &'static str {
        match self {
            Self::DeleteSource => "",
            Self::IfNotExists => "-n",
            Self::Parents => "--parents",
            Self::ReducedRedundancy => "-rr",
            Self::InfrequentAccess => "-ia",
            Self::Recursive => "-R",
            Self::ListEtags => "-e",
            Self::HumanReadable => "-h",
        }
    }

    /// One-line help text, empty for undocumented options
    pub const fn help_text(self) -> &'static str {
        match self {
            Self::DeleteSource => "",
            Self::IfNotExists => "Do not overwrite existing files/objects (no-clobber)",
            Self::Parents => {
                "Create directory structure in destination, starting from the first wildcard"
            }
            Self::ReducedRedundancy => "Store with Reduced-Redundancy mode",
            Self::InfrequentAccess => "Store with Infrequent-Access mode",
            Self::Recursive => "Recursive operation",
            Self::ListEtags => "Show ETags in listing",
            Self::HumanReadable => "Human-readable output for file sizes",
        }
    }

    /// Look up an option by its flag text
    pub fn from_flag(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        HELP_ORDER.into_iter().find(|o| o.flag() == text)
    }
}

impl fmt::Display for OptionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flag() {
            "" => write!(f, "{self:?}"),
            flag => f.write_str(flag),
        }
    }
}

/// Set of options, iterated in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet(BTreeSet<OptionFlag>);

impl OptionSet {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the set contains the option
    pub fn has(&self, option: OptionFlag) -> bool {
        self.0.contains(&option)
    }

    /// Add an option to the set
    pub fn insert(&mut self, option: OptionFlag) {
        self.0.insert(option);
    }

    pub fn iter(&self) -> impl Iterator<Item = OptionFlag> + '_ {
        self.0.iter().copied()
    }

    /// Non-empty flags joined by spaces, with a leading space
    pub fn render(&self) -> String {
        let flags: Vec<&str> = self
            .iter()
            .map(OptionFlag::flag)
            .filter(|f| !f.is_empty())
            .collect();
        if flags.is_empty() {
            String::new()
        } else {
            format!(" {}", flags.join(" "))
        }
    }

    /// Union of two sets
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).copied().collect())
    }
}

impl FromIterator<OptionFlag> for OptionSet {
    fn from_iter<I: IntoIterator<Item = OptionFlag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[OptionFlag; N]> for OptionSet {
    fn from(options: [OptionFlag; N]) -> Self {
        options.into_iter().collect()
    }
}

/// Text of all documented options with their help messages
pub fn options_help() -> String {
    let lines: Vec<String> = HELP_ORDER
        .iter()
        .filter(|o| !o.help_text().is_empty())
        .map(|o| format!("  {:<10} {}", o.flag(), o.help_text()))
        .collect();

    lines.join("\n") + "\n"
}
