//! The refresh loop: fetch each catalog entry and overwrite its local copy.

use std::path::{Path, PathBuf};

use correios_wsdl_core::{Catalog, Entry, EntryOutcome, EntryStatus, RefreshReport};
use tracing::{debug, error, info, warn};

use crate::error::RefreshError;
use crate::fetch::Fetcher;
use crate::settings::Settings;

/// Downloads every entry of a catalog into a target directory.
///
/// Entries are processed one at a time, in catalog order. A failed entry
/// (bad status, transport error, or write error) is logged and recorded in
/// the report; it never prevents the following entries from being attempted.
///
/// # Example
///
/// ```ignore
/// use correios_wsdl_core::Catalog;
/// use correios_wsdl_refresh::{HttpFetcher, Refresher, Settings};
///
/// let settings = Settings::resolve()?;
/// let fetcher = HttpFetcher::new(settings.timeout())?;
/// let refresher = Refresher::from_settings(fetcher, &settings, Catalog::correios()?);
///
/// let report = refresher.refresh_all().await?;
/// println!("{} files written", report.written().count());
/// ```
pub struct Refresher<F> {
    fetcher: F,
    target_dir: PathBuf,
    catalog: Catalog,
}

impl<F: Fetcher> Refresher<F> {
    /// Creates a refresher writing into `target_dir`.
    pub fn new(fetcher: F, target_dir: impl Into<PathBuf>, catalog: Catalog) -> Self {
        Self {
            fetcher,
            target_dir: target_dir.into(),
            catalog,
        }
    }

    /// Creates a refresher writing into the directory named by `settings`.
    pub fn from_settings(fetcher: F, settings: &Settings, catalog: Catalog) -> Self {
        Self::new(fetcher, settings.target_dir(), catalog)
    }

    /// Returns the target directory.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Returns the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Refreshes every entry in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RefreshError::TargetDir` if the target directory cannot be
    /// created. Nothing is fetched in that case.
    pub async fn refresh_all(&self) -> Result<RefreshReport, RefreshError> {
        self.prepare_target_dir().await?;

        debug!(
            fetcher = self.fetcher.name(),
            entries = self.catalog.len(),
            "Refreshing documents into {}",
            self.target_dir.display()
        );

        let mut report = RefreshReport::new();
        for entry in &self.catalog {
            report.push(self.refresh_entry(entry).await);
        }

        info!(
            written = report.written().count(),
            fetch_failed = report.fetch_failures().count(),
            write_failed = report.write_failures().count(),
            bytes = report.total_bytes(),
            "Refresh finished"
        );

        Ok(report)
    }

    /// Refreshes a single entry.
    pub async fn refresh_entry(&self, entry: &Entry) -> EntryOutcome {
        debug!("Updating file: {}", entry.filename());

        let path = self.target_dir.join(entry.filename());

        let body = match self.fetcher.fetch(entry.source()).await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Failed to access Correios: {}", entry.source());
                return EntryOutcome::new(entry, path, EntryStatus::FetchFailed { error: e });
            },
        };

        let status = match self.write_file(entry.filename(), &path, &body).await {
            Ok(bytes_written) => EntryStatus::Written { bytes_written },
            Err(e) => {
                error!(error = %e, "Failed to write {}", path.display());
                EntryStatus::WriteFailed {
                    cause: e.to_string(),
                }
            },
        };

        EntryOutcome::new(entry, path, status)
    }

    async fn prepare_target_dir(&self) -> Result<(), RefreshError> {
        debug!("Ensuring path exists: {}", self.target_dir.display());
        tokio::fs::create_dir_all(&self.target_dir)
            .await
            .map_err(|e| RefreshError::target_dir(&self.target_dir, e))
    }

    /// Replaces the file at `path` with `body`.
    async fn write_file(&self, filename: &str, path: &Path, body: &str) -> std::io::Result<u64> {
        debug!(
            path = %self.target_dir.display(),
            "Creating file: {}",
            filename
        );

        tokio::fs::write(path, body.as_bytes()).await?;

        debug!("Successfully created file: {}", filename);
        Ok(body.len() as u64)
    }
}
