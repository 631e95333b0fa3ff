//! # Design Kit Core
//!
//! Catalog store and query engine for the Base Dapps Design Kit directory.
//!
//! ## Architecture
//!
//! - `models` - The `ProjectRecord` shape shared with every consumer
//! - `catalog` - Loading the read-only catalog from a static JSON document
//! - `query` - Case-insensitive name filtering and category grouping
//! - `error` - `CatalogError`, the only failure the core can report
//!
//! ## Usage
//!
//! ```rust,ignore
//! use designkit_core::catalog::{CatalogSource, FileCatalog};
//! use designkit_core::query::{query, QueryResult};
//!
//! let catalog = FileCatalog::new("public/projects.json").load().await?;
//! match query(catalog.records(), Some("swap")) {
//!     QueryResult::Matches(found) => println!("{} projects", found.len()),
//!     QueryResult::EmptyWithQuery => println!("nothing matched"),
//!     QueryResult::NoQuery => println!("type something"),
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod models;
pub mod query;

pub use catalog::{Catalog, CatalogSource, FileCatalog, StaticCatalog};
pub use error::{CatalogError, CatalogResult};
pub use models::{ProjectRecord, DEFAULT_CATEGORY, PLACEHOLDER_ICON};
pub use query::{group_by_category, query, CategoryGroup, QueryResult};
