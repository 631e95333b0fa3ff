//! # Design Kit Server
//!
//! Axum server exposing the design kit catalog over HTTP, plus the pieces
//! the `designkit` binary wires together.
//!
//! - `app` - router, shared state, server entry
//! - `api` - endpoint handlers and response shapes
//! - `assets` - embedded `public/` files and the embedded catalog
//! - `config` - environment and CLI configuration
//! - `logging` - tracing subscriber setup

pub mod api;
pub mod app;
pub mod assets;
pub mod config;
pub mod logging;

pub use app::{router, serve, AppState, SharedState};
pub use config::{ConfigOverrides, ServerConfig};
