//! Error types for the refresher.

use std::path::PathBuf;

/// Errors that can occur while resolving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The configuration layers could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A resolved value is not usable.
    #[error("invalid setting '{key}': {reason}")]
    Invalid {
        /// Configuration key holding the bad value
        key: String,
        /// Why it was rejected
        reason: String,
    },
}

impl SettingsError {
    /// Creates a new invalid setting error.
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that abort a whole refresh run.
///
/// Per-entry failures are never reported here; they are recorded in the
/// [`RefreshReport`](correios_wsdl_core::RefreshReport) instead.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// The target directory does not exist and could not be created.
    #[error("cannot prepare target directory {path}: {source}")]
    TargetDir {
        /// The directory that could not be created
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("cannot build HTTP client: {0}")]
    HttpClient(String),
}

impl RefreshError {
    /// Creates a new target directory error.
    pub fn target_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TargetDir {
            path: path.into(),
            source,
        }
    }
}
