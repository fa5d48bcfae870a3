//! Errors raised by the submission archive.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading, saving or merging archives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
    /// The archive file could not be read.
    #[error("failed to read archive at '{path}': {message}")]
    IoError {
        /// Archive path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The archive file could not be written.
    #[error("failed to write archive at '{path}': {message}")]
    WriteError {
        /// Path being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The stored archive is not valid submission JSON.
    #[error("invalid archive JSON at '{path}': {message}")]
    ParseError {
        /// Archive path.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// A shared archive document has the wrong shape.
    #[error("invalid shared archive format: {message}")]
    InvalidFormat {
        /// Parser diagnostic.
        message: String,
    },

    /// Submissions could not be rendered as JSON.
    #[error("failed to serialise archive: {message}")]
    SerializeError {
        /// Serializer diagnostic.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::io(
        ArchiveError::IoError { path: "cases/archive.json".into(), message: "denied".to_owned() },
        "failed to read archive at 'cases/archive.json': denied"
    )]
    #[case::format(
        ArchiveError::InvalidFormat { message: "missing field `submissions`".to_owned() },
        "invalid shared archive format: missing field `submissions`"
    )]
    fn formats_errors(#[case] err: ArchiveError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }
}
