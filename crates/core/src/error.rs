//! # Catalog Errors
//!
//! Every variant means the catalog is unavailable for this request. Callers
//! never receive a partially loaded catalog.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing document is missing or could not be read
    #[error("catalog unavailable: failed to read {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not a well-formed array of project records
    #[error("catalog unavailable: malformed catalog in {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Where the failing catalog came from, for logs
    pub fn origin(&self) -> String {
        match self {
            Self::Unreadable { path, .. } => path.display().to_string(),
            Self::Malformed { origin, .. } => origin.clone(),
        }
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
