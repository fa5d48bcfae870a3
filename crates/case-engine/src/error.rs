//! Error types for the case engine.
//!
//! Pool errors cover loading and validating a template pool. Assembly errors
//! cover producing a case from templates that were handed over directly.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating a template pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The pool file could not be read.
    #[error("failed to read template pool at '{path}': {message}")]
    IoError {
        /// Path to the pool file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The pool JSON is malformed or missing required fields.
    #[error("invalid template pool JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The pool version is not supported.
    #[error("unsupported template pool version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the pool.
        actual: u32,
    },

    /// The pool contains no templates.
    #[error("template pool contains no templates")]
    EmptyTemplates,

    /// A template has a blank id or title.
    #[error("template at index {index} has an empty {field}")]
    BlankField {
        /// Index of the offending template.
        index: usize,
        /// Name of the blank field.
        field: &'static str,
    },

    /// Two templates share an id.
    #[error("duplicate template id '{id}'")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// The requested template was not found.
    #[error("template '{id}' not found in pool")]
    TemplateNotFound {
        /// The id that was not found.
        id: String,
    },
}

/// Errors that can occur while assembling a case payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// There are no templates to choose from.
    #[error("cannot assemble a case from an empty template pool")]
    EmptyPool,
}
