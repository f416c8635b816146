//! Operations bound to resolved commands

use crate::core::options::{OptionFlag, OptionSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete action selected by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Abort,
    Download,
    BatchDownload,
    Upload,
    BatchUpload,
    Copy,
    BatchCopy,
    Delete,
    BatchDelete,
    /// Multi-object delete issued by `BatchDelete`, never typed directly
    BatchDeleteActual,
    ListBuckets,
    List,
    Size,
    LocalCopy,
    BatchLocalCopy,
    ShellExec,
    LocalDelete,
}

impl Operation {
    /// Internal operations are hidden from help output
    pub const fn is_internal(self) -> bool {
        matches!(self, Self::BatchDeleteActual)
    }

    /// Batch operations expand into many sub-jobs
    pub const fn is_batch(self) -> bool {
        matches!(
            self,
            Self::BatchDownload
                | Self::BatchUpload
                | Self::BatchCopy
                | Self::BatchDelete
                | Self::BatchLocalCopy
        )
    }

    /// Human-readable description, depending on the entry's default options
    pub fn describe(self, options: &OptionSet) -> &'static str {
        let moving = options.has(OptionFlag::DeleteSource);
        match self {
            Self::Abort => "Exit program",
            Self::Download if moving => "Download from S3 and delete source objects",
            Self::Download => "Download from S3",
            Self::BatchDownload if moving => "Batch download from S3 and delete source objects",
            Self::BatchDownload => "Batch download from S3",
            Self::Upload if moving => "Upload to S3 and delete source files",
            Self::Upload => "Upload to S3",
            Self::BatchUpload if moving => "Batch upload to S3 and delete source files",
            Self::BatchUpload => "Batch upload to S3",
            Self::Copy if moving => "Move S3 object",
            Self::Copy => "Copy S3 object",
            Self::BatchCopy if moving => "Batch move S3 objects",
            Self::BatchCopy => "Batch copy S3 objects",
            Self::Delete => "Delete S3 object",
            Self::BatchDelete => "Batch delete S3 objects",
            Self::BatchDeleteActual => "Batch delete S3 objects (internal)",
            Self::ListBuckets => "List buckets",
            Self::List => "List objects",
            Self::Size => "Count objects and size",
            Self::LocalCopy | Self::BatchLocalCopy if moving => "Move local files",
            Self::LocalCopy | Self::BatchLocalCopy => "Copy local files",
            Self::ShellExec => "Arbitrary shell-execute",
            Self::LocalDelete => "Delete local files",
        }
    }

    /// Options a user may pass to this operation
    pub const fn accepted_options(self) -> &'static [OptionFlag] {
        use crate::core::options::OptionFlag::*;
        match self {
            Self::Download | Self::LocalCopy => &[IfNotExists],
            Self::BatchDownload => &[IfNotExists, Parents],
            Self::Upload | Self::Copy => &[IfNotExists, ReducedRedundancy, InfrequentAccess],
            Self::BatchUpload => &[
                IfNotExists,
                Parents,
                Recursive,
                ReducedRedundancy,
                InfrequentAccess,
            ],
            Self::BatchCopy => &[IfNotExists, Parents, ReducedRedundancy, InfrequentAccess],
            Self::BatchLocalCopy => &[IfNotExists, Parents, Recursive],
            Self::List => &[ListEtags, HumanReadable],
            Self::Size => &[HumanReadable],
            Self::Abort
            | Self::Delete
            | Self::BatchDelete
            | Self::BatchDeleteActual
            | Self::ListBuckets
            | Self::ShellExec
            | Self::LocalDelete => &[],
        }
    }

    /// Check whether a user may pass the option to this operation
    pub fn accepts(self, option: OptionFlag) -> bool {
        self.accepted_options().contains(&option)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_depends_on_delete_source() {
        let moving = OptionSet::from([OptionFlag::DeleteSource]);
        assert_eq!(Operation::Copy.describe(&OptionSet::new()), "Copy S3 object");
        assert_eq!(Operation::Copy.describe(&moving), "Move S3 object");
        assert_eq!(Operation::BatchLocalCopy.describe(&moving), "Move local files");
    }

    #[test]
    fn test_local_copy_family_shares_description() {
        let none = OptionSet::new();
        assert_eq!(
            Operation::LocalCopy.describe(&none),
            Operation::BatchLocalCopy.describe(&none)
        );
    }

    #[test]
    fn test_accepted_options() {
        assert!(Operation::Upload.accepts(OptionFlag::ReducedRedundancy));
        assert!(!Operation::Download.accepts(OptionFlag::ReducedRedundancy));
        assert!(!Operation::Copy.accepts(OptionFlag::DeleteSource));
        assert!(Operation::Delete.accepted_options().is_empty());
    }

    #[test]
    fn test_internal_and_batch() {
        assert!(Operation::BatchDeleteActual.is_internal());
        assert!(!Operation::BatchDelete.is_internal());
        assert!(Operation::BatchCopy.is_batch());
        assert!(!Operation::Copy.is_batch());
    }
}
