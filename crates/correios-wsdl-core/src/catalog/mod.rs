//! The set of documents a refresh run downloads.

mod entry;

pub use entry::Entry;

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CatalogError;

/// The Correios service descriptions, in refresh order.
const CORREIOS_ENTRIES: [(&str, &str); 5] = [
    (
        "https://apps.correios.com.br/SigepMasterJPA/AtendeClienteService/AtendeCliente?wsdl",
        "AtendeCliente-production.wsdl",
    ),
    (
        "https://apphom.correios.com.br/SigepMasterJPA/AtendeClienteService/AtendeCliente?wsdl",
        "AtendeCliente-test.wsdl",
    ),
    (
        "https://webservice.correios.com.br/service/rastro/Rastro.wsdl",
        "Rastro.wsdl",
    ),
    (
        "http://ws.correios.com.br/calculador/CalcPrecoPrazo.asmx?WSDL",
        "CalcPrecoPrazo.asmx",
    ),
    (
        "https://webservice.correios.com.br/service/rastro/Rastro_schema1.xsd",
        "Rastro_schema1.xsd",
    ),
];

/// An ordered, immutable list of entries.
///
/// Filenames are unique within a catalog, so the resulting file set never
/// depends on the order entries are processed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Creates a catalog from already validated entries.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateFilename` if two entries share a filename.
    pub fn new(entries: Vec<Entry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.filename()) {
                return Err(CatalogError::DuplicateFilename(
                    entry.filename().to_string(),
                ));
            }
        }

        Ok(Self { entries })
    }

    /// Creates a catalog from `(url, filename)` pairs.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, CatalogError> {
        let entries = pairs
            .into_iter()
            .map(|(url, filename)| Entry::new(url, filename))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(entries)
    }

    /// The built-in Correios catalog (SIGEP production and homologation,
    /// tracking, price/deadline calculator, tracking schema).
    pub fn correios() -> Result<Self, CatalogError> {
        Self::from_pairs(CORREIOS_ENTRIES)
    }

    /// Returns the entries in refresh order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Returns the destination filenames in refresh order.
    pub fn filenames(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::filename).collect()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
