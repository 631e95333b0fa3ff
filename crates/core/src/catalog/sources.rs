use super::CatalogSource;
use crate::error::{CatalogError, CatalogResult};
use async_trait::async_trait;
use std::borrow::Cow;
use std::path::PathBuf;
use tokio::fs;

/// Catalog backed by a JSON document on disk
///
/// The file is read on every [`CatalogSource::load`] call, so edits to the
/// document are picked up by the next request.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn read_document(&self) -> CatalogResult<Vec<u8>> {
        fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Unreadable {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Catalog backed by JSON text held in memory
///
/// Parsed on every load, so a malformed document fails each request the same
/// way a malformed file would.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    label: String,
    json: Cow<'static, str>,
}

impl StaticCatalog {
    pub fn new(label: impl Into<String>, json: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            json: json.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn read_document(&self) -> CatalogResult<Vec<u8>> {
        Ok(self.json.as_bytes().to_vec())
    }

    fn describe(&self) -> String {
        format!("static {}", self.label)
    }
}
