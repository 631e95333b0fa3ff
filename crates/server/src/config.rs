//! # Server Configuration
//!
//! Defaults, overridden by `DESIGNKIT_*` environment variables (a `.env`
//! file is honoured), overridden in turn by CLI flags.

use anyhow::{Context, Result};
use designkit_core::{CatalogSource, FileCatalog};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use crate::assets::EmbeddedCatalog;

pub const ENV_BIND: &str = "DESIGNKIT_BIND";
pub const ENV_PORT: &str = "DESIGNKIT_PORT";
pub const ENV_CATALOG: &str = "DESIGNKIT_CATALOG";
pub const ENV_LOG_JSON: &str = "DESIGNKIT_LOG_JSON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Catalog document on disk; `None` serves the embedded `projects.json`
    pub catalog_path: Option<PathBuf>,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            catalog_path: None,
            log_json: false,
        }
    }
}

/// Values supplied on the command line; only `Some` fields win
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind: Option<IpAddr>,
    pub port: Option<u16>,
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Build from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Catalog and logging settings from the process environment
    ///
    /// For commands that never bind a socket: `DESIGNKIT_BIND` and
    /// `DESIGNKIT_PORT` are not read, so a bad value there cannot fail them.
    pub fn offline_from_env() -> Result<Self> {
        Self::offline_from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::offline_from_lookup(&lookup)?;

        if let Some(bind) = non_empty(lookup(ENV_BIND)) {
            config.bind = bind
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", ENV_BIND, bind))?;
        }
        if let Some(port) = non_empty(lookup(ENV_PORT)) {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", ENV_PORT, port))?;
        }

        Ok(config)
    }

    /// Like [`ServerConfig::from_lookup`], minus the listener settings
    pub fn offline_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = non_empty(lookup(ENV_CATALOG)) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(flag) = non_empty(lookup(ENV_LOG_JSON)) {
            config.log_json = parse_bool(&flag)
                .with_context(|| format!("Invalid {}: {:?}", ENV_LOG_JSON, flag))?;
        }

        Ok(config)
    }

    pub fn merge(&mut self, other: ConfigOverrides) {
        if let Some(bind) = other.bind {
            self.bind = bind;
        }
        if let Some(port) = other.port {
            self.port = port;
        }
        if other.catalog_path.is_some() {
            self.catalog_path = other.catalog_path;
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// The catalog source this configuration selects
    pub fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        match &self.catalog_path {
            Some(path) => Arc::new(FileCatalog::new(path.clone())),
            None => Arc::new(EmbeddedCatalog),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {:?}", other),
    }
}
