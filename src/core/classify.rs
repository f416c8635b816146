//! Argument classification
//!
//! Turns a raw argument token into the set of shapes it satisfies, looking
//! at the S3 URL syntax, glob metacharacters and the local filesystem.

use crate::core::params::{ParamShape, ShapeSet};
use crate::error::{CommandError, Result};
use crate::utils::fs::{FileSystemUtils, PathKind};
use regex::Regex;
use tracing::{debug, instrument};

const GLOB_CHARS: [char; 3] = ['*', '?', '['];
const S3_WILDCARDS: [char; 2] = ['*', '?'];

/// Parsed form of an `s3://bucket/key` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Url {
    pub bucket: String,
    pub key: String,
    /// Token ended in "/", including a bare `s3://bucket/`
    pub trailing_slash: bool,
}

impl S3Url {
    pub fn has_wildcard(&self) -> bool {
        self.key.contains(S3_WILDCARDS)
    }

    /// Bucket only, or a token ending in "/"
    pub fn is_prefix(&self) -> bool {
        self.key.is_empty() || self.trailing_slash
    }
}

/// Classifier mapping argument tokens to candidate shapes
#[derive(Debug)]
pub struct ArgumentClassifier {
    re_s3_url: Regex,
    fs_utils: FileSystemUtils,
}

impl ArgumentClassifier {
    /// Create a new argument classifier
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_s3_url: Regex::new(r"^s3://([^/]+)(?:/(.*))?$")
                .map_err(|e| CommandError::config(format!("Failed to compile regex: {}", e)))?,
            fs_utils: FileSystemUtils::new(),
        })
    }

    /// Parse an S3 URL, `None` for anything else
    pub fn parse_s3_url(&self, token: &str) -> Option<S3Url> {
        let cap = self.re_s3_url.captures(token)?;
        Some(S3Url {
            bucket: cap.get(1)?.as_str().to_string(),
            key: cap.get(2).map_or("", |m| m.as_str()).to_string(),
            trailing_slash: token.ends_with('/'),
        })
    }

    /// All shapes the token satisfies
    #[instrument(skip(self))]
    pub fn classify(&self, token: &str) -> ShapeSet {
        let mut shapes = ShapeSet::from([ParamShape::Unchecked, ParamShape::UncheckedOneOrMore]);

        if let Some(url) = self.parse_s3_url(token) {
            self.classify_s3(&url, &mut shapes);
        } else if !token.starts_with("s3://") {
            self.classify_local(token, &mut shapes);
        }

        debug!("Classified {:?} as {}", token, shapes);
        shapes
    }

    /// Classify every token in order
    pub fn classify_all<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<ShapeSet> {
        tokens.iter().map(|t| self.classify(t.as_ref())).collect()
    }

    fn classify_s3(&self, url: &S3Url, shapes: &mut ShapeSet) {
        if url.has_wildcard() {
            shapes.insert(ParamShape::S3WildObj);
            return;
        }

        shapes.insert(ParamShape::S3ObjOrDir);
        if url.is_prefix() {
            shapes.insert(ParamShape::S3Dir);
        }
        if !url.trailing_slash {
            shapes.insert(ParamShape::S3Obj);
        }
    }

    fn classify_local(&self, token: &str, shapes: &mut ShapeSet) {
        let kind = self.fs_utils.probe(token);

        if token.contains(GLOB_CHARS) && glob::Pattern::new(token).is_ok() {
            shapes.insert(ParamShape::Glob);
            // a literal file may still carry glob characters in its name
            if kind == PathKind::File {
                shapes.insert(ParamShape::FileObj);
                shapes.insert(ParamShape::FileOrDir);
            }
            return;
        }

        match kind {
            PathKind::Directory => {
                shapes.insert(ParamShape::Dir);
                shapes.insert(ParamShape::FileOrDir);
            }
            PathKind::File => {
                shapes.insert(ParamShape::FileObj);
                shapes.insert(ParamShape::FileOrDir);
            }
            PathKind::Missing if token.ends_with('/') => {
                shapes.insert(ParamShape::Dir);
                shapes.insert(ParamShape::FileOrDir);
            }
            PathKind::Missing => {
                shapes.insert(ParamShape::FileObj);
                shapes.insert(ParamShape::FileOrDir);
                shapes.insert(ParamShape::Dir);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CommandResolver, CommandTable, Operation, OptionSet};
    use std::fs;
    use tempfile::TempDir;

    fn classifier() -> ArgumentClassifier {
        ArgumentClassifier::new().unwrap()
    }

    #[test]
    fn test_parse_s3_url() {
        let c = classifier();
        let url = c.parse_s3_url("s3://bucket/dir/key.txt").unwrap();
        assert_eq!(url.bucket, "bucket");
        assert_eq!(url.key, "dir/key.txt");

        let url = c.parse_s3_url("s3://bucket").unwrap();
        assert_eq!(url.key, "");
        assert!(url.is_prefix());

        assert!(c.parse_s3_url("/tmp/file").is_none());
        assert!(c.parse_s3_url("s3://").is_none());
    }

    #[test]
    fn test_s3_object() {
        let shapes = classifier().classify("s3://bucket/key.txt");
        assert!(shapes.contains(ParamShape::S3Obj));
        assert!(shapes.contains(ParamShape::S3ObjOrDir));
        assert!(!shapes.contains(ParamShape::S3Dir));
        assert!(!shapes.contains(ParamShape::FileObj));
    }

    #[test]
    fn test_s3_prefix_and_bucket() {
        let c = classifier();

        let shapes = c.classify("s3://bucket/dir/");
        assert!(shapes.contains(ParamShape::S3Dir));
        assert!(shapes.contains(ParamShape::S3ObjOrDir));
        assert!(!shapes.contains(ParamShape::S3Obj));

        let shapes = c.classify("s3://bucket");
        assert!(shapes.contains(ParamShape::S3Dir));
        assert!(shapes.contains(ParamShape::S3Obj));
    }

    #[test]
    fn test_bucket_root_with_trailing_slash_is_prefix_only() {
        let c = classifier();

        let url = c.parse_s3_url("s3://bucket/").unwrap();
        assert_eq!(url.key, "");
        assert!(url.trailing_slash);

        let shapes = c.classify("s3://bucket/");
        assert!(shapes.contains(ParamShape::S3Dir));
        assert!(shapes.contains(ParamShape::S3ObjOrDir));
        assert!(!shapes.contains(ParamShape::S3Obj));
    }

    #[test]
    fn test_rm_bucket_root_is_unsupported() {
        let table = CommandTable::standard().unwrap();
        let resolver = CommandResolver::new(&table);
        let c = classifier();

        for token in ["s3://bucket/", "s3://bucket/dir/"] {
            let err = resolver
                .resolve("rm", &c.classify_all(&[token]), &OptionSet::new())
                .unwrap_err();
            assert_eq!(err, CommandError::unsupported("rm", 1));
        }

        let resolved = resolver
            .resolve("ls", &c.classify_all(&["s3://bucket/"]), &OptionSet::new())
            .unwrap();
        assert_eq!(resolved.operation, Operation::List);
    }

    #[test]
    fn test_s3_wildcard() {
        let shapes = classifier().classify("s3://bucket/logs/*/2024-*.gz");
        assert!(shapes.contains(ParamShape::S3WildObj));
        assert!(!shapes.contains(ParamShape::S3Obj));
        assert!(!shapes.contains(ParamShape::Glob));
    }

    #[test]
    fn test_malformed_s3_url_is_unchecked_only() {
        let shapes = classifier().classify("s3://");
        assert_eq!(shapes, ShapeSet::from([ParamShape::Unchecked, ParamShape::UncheckedOneOrMore]));
    }

    #[test]
    fn test_local_paths() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();
        let c = classifier();

        let shapes = c.classify(file.to_str().unwrap());
        assert!(shapes.contains(ParamShape::FileObj));
        assert!(!shapes.contains(ParamShape::Dir));

        let shapes = c.classify(temp_dir.path().to_str().unwrap());
        assert!(shapes.contains(ParamShape::Dir));
        assert!(!shapes.contains(ParamShape::FileObj));

        let missing = temp_dir.path().join("new-name");
        let shapes = c.classify(missing.to_str().unwrap());
        assert!(shapes.contains(ParamShape::FileObj));
        assert!(shapes.contains(ParamShape::Dir));

        let missing_dir = format!("{}/", missing.display());
        let shapes = c.classify(&missing_dir);
        assert!(shapes.contains(ParamShape::Dir));
        assert!(!shapes.contains(ParamShape::FileObj));
    }

    #[test]
    fn test_local_glob() {
        let temp_dir = TempDir::new().unwrap();
        let c = classifier();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let shapes = c.classify(&pattern);
        assert!(shapes.contains(ParamShape::Glob));
        assert!(!shapes.contains(ParamShape::FileObj));

        let literal = temp_dir.path().join("report?.txt");
        fs::write(&literal, "x").unwrap();
        let shapes = c.classify(literal.to_str().unwrap());
        assert!(shapes.contains(ParamShape::Glob));
        assert!(shapes.contains(ParamShape::FileObj));
    }
}
