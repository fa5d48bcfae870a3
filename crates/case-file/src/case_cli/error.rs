//! Error types for the case-file CLI.

use case_engine::{AssemblyError, PoolError};
use thiserror::Error;

use crate::settings::SettingsError;

/// Errors surfaced by argument parsing and case generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// Settings could not be loaded.
    #[error("settings error: {source}")]
    Settings {
        /// Underlying settings error.
        #[from]
        source: SettingsError,
    },
    /// The template pool could not be loaded.
    #[error("template pool error: {source}")]
    Pool {
        /// Underlying pool error.
        #[from]
        source: PoolError,
    },
    /// No case could be assembled.
    #[error("case assembly error: {source}")]
    Assembly {
        /// Underlying assembly error.
        #[from]
        source: AssemblyError,
    },
    /// The async runtime for enrichment could not start.
    #[error("failed to start enrichment runtime: {message}")]
    Runtime {
        /// Runtime builder message.
        message: String,
    },
    /// The case could not be rendered as JSON.
    #[error("failed to render case: {message}")]
    Render {
        /// Serializer message.
        message: String,
    },
}
