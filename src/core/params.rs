//! Parameter shapes
//!
//! A shape describes what kind of token an argument is. A single token can
//! satisfy several shapes at once, so classification produces a [`ShapeSet`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Kind of argument accepted by a command signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ParamShape {
    /// Arbitrary single parameter
    Unchecked,
    /// One or more arbitrary parameters, only valid as the last shape
    UncheckedOneOrMore,
    /// Bucket or bucket + key
    S3Obj,
    /// Bucket or bucket + key + "/" (prefix)
    S3Dir,
    /// Bucket or bucket + key, with or without trailing "/"
    S3ObjOrDir,
    /// Bucket + key with wildcard
    S3WildObj,
    /// Local filename
    FileObj,
    /// Directory name, or a name that does not exist yet
    Dir,
    /// File or directory
    FileOrDir,
    /// Local glob pattern
    Glob,
}

impl ParamShape {
    /// Canonical display form used in help output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unchecked => "param",
            Self::UncheckedOneOrMore => "param...",
            Self::S3Obj => "s3://bucket[/object]",
            Self::S3Dir => "s3://bucket[/object]/",
            Self::S3ObjOrDir => "s3://bucket[/object[/]]",
            Self::S3WildObj => "s3://bucket/wild/*/obj*",
            Self::FileObj => "filename",
            Self::Dir => "directory",
            Self::FileOrDir => "file-or-directory",
            Self::Glob => "glob-pattern*",
        }
    }

    /// Label for a raw shape discriminant, `unknown` when out of range
    pub fn label_for_index(index: usize) -> &'static str {
        Self::ALL.get(index).map_or("unknown", |shape| shape.label())
    }

    /// All shapes in declaration order
    pub const ALL: [Self; 10] = [
        Self::Unchecked,
        Self::UncheckedOneOrMore,
        Self::S3Obj,
        Self::S3Dir,
        Self::S3ObjOrDir,
        Self::S3WildObj,
        Self::FileObj,
        Self::Dir,
        Self::FileOrDir,
        Self::Glob,
    ];
}

impl fmt::Display for ParamShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of shapes a single argument satisfies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSet(BTreeSet<ParamShape>);

impl ShapeSet {
    /// Create an empty shape set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape to the set
    pub fn insert(&mut self, shape: ParamShape) {
        self.0.insert(shape);
    }

    /// Check whether the argument satisfies the given shape
    pub fn contains(&self, shape: ParamShape) -> bool {
        self.0.contains(&shape)
    }

    /// Iterate over the shapes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = ParamShape> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ParamShape> for ShapeSet {
    fn from_iter<I: IntoIterator<Item = ParamShape>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[ParamShape; N]> for ShapeSet {
    fn from(shapes: [ParamShape; N]) -> Self {
        shapes.into_iter().collect()
    }
}

impl fmt::Display for ShapeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.iter().map(ParamShape::label).collect();
        write!(f, "{{{}}}", labels.join(", "))
    }
}
