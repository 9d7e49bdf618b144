//! Lookup-list loading
//!
//! Banned-IP and authorized-user lists are plain text files of
//! whitespace-separated tokens. They are loaded once at startup and
//! passed into the processor as immutable sets.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a lookup list
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Error opening file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load a whitespace-delimited token file into a set.
///
/// Every token becomes one member; duplicates collapse. No validation
/// of token shape is done, the caller picks the right file for the
/// right purpose. An unreadable file is a fatal configuration error,
/// never an empty set.
pub fn load_lookup(path: &Path) -> Result<HashSet<String>, LookupError> {
    let contents = fs::read_to_string(path).map_err(|source| LookupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents
        .split_whitespace()
        .map(str::to_owned)
        .collect())
}
