//! Test helpers for correios-wsdl-refresh.

#![allow(dead_code, unused_imports)]

pub mod logs;
pub mod mock;
pub mod server;

pub use logs::LogCapture;
pub use mock::MockFetcher;
pub use server::{TestServer, closed_port_url};

use std::path::Path;

/// Returns the sorted names of the files inside `dir`.
pub fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read target directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Reads a file the test expects to exist.
pub fn read(dir: &Path, filename: &str) -> String {
    std::fs::read_to_string(dir.join(filename))
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", filename, e))
}
