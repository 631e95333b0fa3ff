//! # Catalog Store
//!
//! Produces the ordered, read-only list of project records. A [`Catalog`]
//! is built once per load and never mutated afterwards.
//!
//! ## Sources
//!
//! - [`FileCatalog`] - re-reads a JSON document from disk on every load
//! - [`StaticCatalog`] - parses JSON text held in memory (embedded assets, tests)

mod sources;

pub use sources::{FileCatalog, StaticCatalog};

use crate::error::{CatalogError, CatalogResult};
use crate::models::ProjectRecord;
use async_trait::async_trait;

/// Anything that can hand out a fresh catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the catalog document exactly as stored
    async fn read_document(&self) -> CatalogResult<Vec<u8>>;

    /// Human-readable description of the source, for logs and errors
    fn describe(&self) -> String;

    /// Load the full catalog, or fail without returning any records
    async fn load(&self) -> CatalogResult<Catalog> {
        let bytes = self.read_document().await?;
        let catalog = Catalog::from_slice(&bytes, &self.describe())?;
        tracing::debug!(source = %self.describe(), records = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The document bytes, untouched, once they are known to parse as a catalog
    ///
    /// Fields the record type does not model (and explicit `null`s) survive.
    async fn load_raw(&self) -> CatalogResult<Vec<u8>> {
        let bytes = self.read_document().await?;
        Catalog::from_slice(&bytes, &self.describe())?;
        Ok(bytes)
    }
}

/// Ordered sequence of project records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Parse a catalog document (a JSON array of records)
    ///
    /// `origin` only feeds the error message.
    pub fn from_json(text: &str, origin: &str) -> CatalogResult<Self> {
        let records: Vec<ProjectRecord> =
            serde_json::from_str(text).map_err(|source| CatalogError::Malformed {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self { records })
    }

    /// Parse a catalog document from raw bytes
    pub fn from_slice(bytes: &[u8], origin: &str) -> CatalogResult<Self> {
        let records: Vec<ProjectRecord> =
            serde_json::from_slice(bytes).map_err(|source| CatalogError::Malformed {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by exact name, first in catalog order
    pub fn find(&self, name: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "Acme", "designKitUrl": "https://acme.xyz/kit"},
        {"name": "Zebra", "designKitUrl": "https://zebra.xyz/kit", "category": "NFT"}
    ]"#;

    #[test]
    fn test_from_json_preserves_order() {
        let catalog = Catalog::from_json(SAMPLE, "sample").unwrap();
        assert_eq!(catalog.len(), 2);
        let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Zebra"]);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let err = Catalog::from_json(r#"{"name": "Acme"}"#, "sample").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
        assert_eq!(err.origin(), "sample");
    }

    #[test]
    fn test_from_json_rejects_bad_record() {
        // One broken record poisons the whole document
        let text = r#"[
            {"name": "Acme", "designKitUrl": "https://acme.xyz/kit"},
            {"name": 7, "designKitUrl": "https://broken.xyz"}
        ]"#;
        assert!(Catalog::from_json(text, "sample").is_err());
    }

    #[test]
    fn test_empty_array_is_valid() {
        let catalog = Catalog::from_json("[]", "sample").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_find_exact_name() {
        let catalog = Catalog::from_json(SAMPLE, "sample").unwrap();
        assert_eq!(catalog.find("Zebra").map(|r| r.category_bucket()), Some("NFT"));
        assert!(catalog.find("zebra").is_none());
    }
}
