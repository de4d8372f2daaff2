//! # Correios WSDL Refresher
//!
//! Downloads the Correios web-service descriptions (WSDL/XSD) and overwrites
//! the local copies a SOAP client is built against.
//!
//! ## Features
//!
//! - Built-in catalog of the five Correios documents
//! - Target directory override through `CORREIOS_WSDL_PATH`
//! - Best-effort refresh: failed entries are logged and reported, never fatal
//! - Swappable transport through the [`Fetcher`] trait
//!
//! ## Example
//!
//! ```ignore
//! use correios_wsdl_refresh::{Catalog, HttpFetcher, Refresher, Settings};
//!
//! let settings = Settings::resolve()?;
//! let fetcher = HttpFetcher::new(settings.timeout())?;
//!
//! let report = Refresher::from_settings(fetcher, &settings, Catalog::correios()?)
//!     .refresh_all()
//!     .await?;
//! ```

pub mod error;
pub mod fetch;
pub mod refresher;
pub mod report;
pub mod settings;

// Re-exports
pub use error::{RefreshError, SettingsError};
pub use fetch::{Fetcher, HttpFetcher};
pub use refresher::Refresher;
pub use report::write_report;
pub use settings::{ReportFormat, Settings};

// Re-export the domain types for consumers
pub use correios_wsdl_core::{
    Catalog, CatalogError, Entry, EntryOutcome, EntryStatus, FetchError, RefreshReport,
};
