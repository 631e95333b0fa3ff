//! # Embedded Assets
//!
//! The `public/` directory is compiled into the binary. It carries the
//! default `projects.json` catalog and the placeholder icon.

use async_trait::async_trait;
use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use designkit_core::{CatalogError, CatalogResult, CatalogSource};
use rust_embed::RustEmbed;
use std::path::PathBuf;

/// Embedded static assets
#[derive(RustEmbed)]
#[folder = "../../public"]
pub struct Assets;

/// Name of the catalog document inside `public/`
pub const CATALOG_ASSET: &str = "projects.json";

/// Catalog served from the `projects.json` compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

#[async_trait]
impl CatalogSource for EmbeddedCatalog {
    async fn read_document(&self) -> CatalogResult<Vec<u8>> {
        let file = Assets::get(CATALOG_ASSET).ok_or_else(|| CatalogError::Unreadable {
            path: PathBuf::from(CATALOG_ASSET),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "catalog asset is not embedded",
            ),
        })?;

        Ok(file.data.into_owned())
    }

    fn describe(&self) -> String {
        format!("embedded {}", CATALOG_ASSET)
    }
}

/// Fallback handler: serve a file from `public/` or 404
pub async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    match Assets::get(path) {
        Some(file) if !path.is_empty() => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                file.data.into_owned(),
            )
                .into_response()
        }
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
