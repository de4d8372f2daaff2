//! Correios WSDL Core - Domain types
//!
//! This crate provides the types shared by the refresher: the catalog of
//! documents to download, per-entry outcomes, the run report, and the error
//! types.

pub mod catalog;
pub mod error;
pub mod outcome;

pub use catalog::{Catalog, Entry};
pub use error::{CatalogError, FetchError};
pub use outcome::{EntryOutcome, EntryStatus, RefreshReport};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
