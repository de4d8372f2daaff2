//! Error types for the WSDL refresher domain.
//!
//! Two families live here:
//! - [`CatalogError`] is raised while building entries and catalogs, before
//!   any network traffic happens.
//! - [`FetchError`] describes why a single download did not produce a body.
//!   It is never fatal to a run and ends up inside an
//!   [`EntryStatus::FetchFailed`](crate::EntryStatus::FetchFailed).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating entries or assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The source is not an absolute http(s) URL.
    #[error("invalid source URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as it was given
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The filename is not a single relative path component.
    #[error("invalid filename '{filename}': {reason}")]
    InvalidFilename {
        /// The filename as it was given
        filename: String,
        /// Why it was rejected
        reason: String,
    },

    /// Two entries target the same file.
    #[error("duplicate filename '{0}' in catalog")]
    DuplicateFilename(String),
}

impl CatalogError {
    /// Creates an InvalidUrl error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates an InvalidFilename error.
    pub fn invalid_filename(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFilename {
            filename: filename.into(),
            reason: reason.into(),
        }
    }
}

/// Why a document could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchError {
    /// The server answered with something other than 200.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// The status code received
        status: u16,
    },

    /// The request never produced a usable response (DNS, connect, TLS,
    /// timeout, or body decoding).
    #[error("transport error: {reason}")]
    Transport {
        /// Description of the underlying failure
        reason: String,
    },
}

impl FetchError {
    /// Creates a Status error.
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates a Transport error.
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Returns the HTTP status, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Transport { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::invalid_url("ftp://x", "unsupported scheme 'ftp'");
        assert_eq!(
            err.to_string(),
            "invalid source URL 'ftp://x': unsupported scheme 'ftp'"
        );

        let err = CatalogError::DuplicateFilename("Rastro.wsdl".to_string());
        assert_eq!(err.to_string(), "duplicate filename 'Rastro.wsdl' in catalog");
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::status(500).to_string(),
            "unexpected HTTP status 500"
        );
        assert_eq!(
            FetchError::transport("connection refused").to_string(),
            "transport error: connection refused"
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(FetchError::status(404).status_code(), Some(404));
        assert_eq!(FetchError::transport("timed out").status_code(), None);
    }

    #[test]
    fn test_fetch_error_serialization() {
        let json = serde_json::to_string(&FetchError::status(503)).unwrap();
        assert_eq!(json, r#"{"kind":"status","status":503}"#);
    }
}
