//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Structural violations in a test outline.
///
/// Every variant is fatal for the conversion in progress.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("the file format is not a valid yaml object")]
    NotAnObject,

    #[error("the test definition must have only one root node, found {0}")]
    MultipleRoots(usize),

    #[error("a root node needs to be defined")]
    MissingRoot,

    #[error("the root key must be a plain scalar")]
    InvalidRootKey,

    #[error("the root node must hold a list of rules")]
    RootNotAList,

    #[error("the root node needs to include at least one element")]
    EmptyRoot,

    #[error("all rules should have a given, when, or it field (at {path})")]
    MissingStatement { path: String },

    #[error("invalid rule at {path}: {message}")]
    InvalidRule { path: String, message: String },
}

/// Result type for tree building.
pub type BuildResult<T> = Result<T, FormatError>;
