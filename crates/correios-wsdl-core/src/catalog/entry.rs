//! A single (source URL, destination filename) pair.

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::error::CatalogError;

/// One document to refresh: where to download it from and which file in the
/// target directory receives it.
///
/// Entries are validated on construction and immutable afterwards.
///
/// # Example
///
/// ```
/// use correios_wsdl_core::Entry;
///
/// let entry = Entry::new(
///     "https://webservice.correios.com.br/service/rastro/Rastro.wsdl",
///     "Rastro.wsdl",
/// )
/// .unwrap();
/// assert_eq!(entry.filename(), "Rastro.wsdl");
/// assert!(Entry::new("https://example.com/a.wsdl", "../a.wsdl").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    source: Url,
    filename: String,
}

impl Entry {
    /// Creates a new entry after validating both fields.
    ///
    /// # Errors
    ///
    /// - `CatalogError::InvalidUrl` if `source` is not an absolute http(s) URL
    /// - `CatalogError::InvalidFilename` if `filename` is not a single path component
    pub fn new(source: &str, filename: impl Into<String>) -> Result<Self, CatalogError> {
        let source = parse_source(source)?;
        let filename = filename.into();
        validate_filename(&filename)?;

        Ok(Self { source, filename })
    }

    /// Returns the URL the document is downloaded from.
    ///
    /// This is the parsed form, which may differ cosmetically from the string
    /// given to [`Entry::new`]: a host-only URL gains a trailing `/`, and the
    /// scheme and host are lowercased. Paths and query strings are kept as is.
    pub fn source(&self) -> &Url {
        &self.source
    }

    /// Returns the file name inside the target directory.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.filename)
    }
}

fn parse_source(source: &str) -> Result<Url, CatalogError> {
    let url = Url::parse(source.trim())
        .map_err(|e| CatalogError::invalid_url(source, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {},
        other => {
            return Err(CatalogError::invalid_url(
                source,
                format!("unsupported scheme '{}'", other),
            ));
        },
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(CatalogError::invalid_url(source, "missing host"));
    }

    Ok(url)
}

fn validate_filename(filename: &str) -> Result<(), CatalogError> {
    if filename.trim().is_empty() {
        return Err(CatalogError::invalid_filename(
            filename,
            "cannot be empty",
        ));
    }

    if filename.contains(['/', '\\']) {
        return Err(CatalogError::invalid_filename(
            filename,
            "must not contain path separators",
        ));
    }

    if filename == "." || filename == ".." {
        return Err(CatalogError::invalid_filename(
            filename,
            "must name a file",
        ));
    }

    Ok(())
}
