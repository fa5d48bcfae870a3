//! Runtime settings loaded via `OrthoConfig` from `CASE_FILE_*` variables
//! and configuration files.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use case_engine::{PoolError, TemplatePool};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// Program name handed to the configuration loader.
const APP_NAME: &str = "case-file";

/// Settings shared by the `case-file` binary and embedding applications.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CASE_FILE")]
pub struct CaseFileSettings {
    /// Template pool to load instead of the bundled one.
    pub pool_path: Option<PathBuf>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub json_logs: bool,
    /// Run the enrichment chain before falling back to static templates.
    #[ortho_config(default = false)]
    pub enrichment: bool,
}

/// Errors raised while loading settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Configuration sources could not be merged.
    #[error("failed to load case-file settings: {message}")]
    Load {
        /// Loader diagnostic.
        message: String,
    },
}

impl CaseFileSettings {
    /// Loads settings from the environment and configuration files only.
    ///
    /// Command-line flags are parsed separately by the binary.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] if a source holds an invalid value.
    pub fn from_environment() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(APP_NAME)]).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Configured pool path, if any.
    #[must_use]
    pub fn pool_path(&self) -> Option<&Path> {
        self.pool_path.as_deref()
    }

    /// Loads the configured pool, or the bundled pool when none is set.
    ///
    /// # Errors
    ///
    /// Returns the [`PoolError`] raised while reading or validating the pool.
    pub fn template_pool(&self) -> Result<TemplatePool, PoolError> {
        self.pool_path()
            .map_or_else(TemplatePool::bundled, TemplatePool::from_file)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("CASE_FILE_POOL_PATH", None::<String>),
            ("CASE_FILE_JSON_LOGS", None::<String>),
            ("CASE_FILE_ENRICHMENT", None::<String>),
        ]);

        let settings = CaseFileSettings::from_environment().expect("settings should load");
        assert!(settings.pool_path().is_none());
        assert!(!settings.json_logs);
        assert!(!settings.enrichment);
        let pool = settings.template_pool().expect("bundled pool");
        assert!(!pool.is_empty());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CASE_FILE_POOL_PATH", Some("/tmp/pool.json".to_owned())),
            ("CASE_FILE_JSON_LOGS", Some("true".to_owned())),
            ("CASE_FILE_ENRICHMENT", Some("true".to_owned())),
        ]);

        let settings = CaseFileSettings::from_environment().expect("settings should load");
        assert_eq!(settings.pool_path(), Some(Path::new("/tmp/pool.json")));
        assert!(settings.json_logs);
        assert!(settings.enrichment);
    }

    #[rstest]
    fn missing_pool_file_is_reported() {
        let settings = CaseFileSettings {
            pool_path: Some(PathBuf::from("target/case-file-tests/no-such-pool.json")),
            json_logs: false,
            enrichment: false,
        };

        let err = settings.template_pool().expect_err("missing pool");
        assert!(matches!(err, PoolError::IoError { .. }));
    }

    #[rstest]
    fn formats_load_error() {
        let err = SettingsError::Load {
            message: "bad bool".to_owned(),
        };
        assert_eq!(err.to_string(), "failed to load case-file settings: bad bool");
    }
}
