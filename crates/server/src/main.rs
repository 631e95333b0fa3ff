//! Design Kit Server
//!
//! `designkit serve` runs the HTTP API; `designkit search` runs the same
//! query engine from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use designkit_core::query;
use designkit_server::api::projects::GroupedResponse;
use designkit_server::api::search::SearchResponse;
use designkit_server::logging::init_tracing;
use designkit_server::{serve, ConfigOverrides, ServerConfig};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(author, version, about = "Base Dapps Design Kit - design kit directory and search API")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the HTTP server (default)
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind
        #[arg(short, long)]
        bind: Option<IpAddr>,
        /// Catalog JSON file (defaults to the embedded projects.json)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Search the catalog without starting a server
    Search {
        /// Case-insensitive substring of the project name
        term: Option<String>,
        /// Group results by category
        #[arg(short, long)]
        grouped: bool,
        /// Catalog JSON file (defaults to the embedded projects.json)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

async fn run_search(config: &ServerConfig, term: Option<&str>, grouped: bool) -> Result<()> {
    let source = config.catalog_source();
    let catalog = source
        .load()
        .await
        .with_context(|| format!("Unable to fetch projects data from {}", source.describe()))?;

    let output = if grouped {
        serde_json::to_string_pretty(&GroupedResponse::build(&catalog, term))?
    } else {
        let result = query(catalog.records(), term);
        serde_json::to_string_pretty(&SearchResponse::from_result(result, term))?
    };

    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    // `search` never listens, so it skips the bind/port settings
    let mut config = match &args.command {
        Some(CliCommand::Search { .. }) => ServerConfig::offline_from_env()?,
        _ => ServerConfig::from_env()?,
    };
    init_tracing(config.log_json);

    match dotenv {
        Ok(path) => tracing::debug!(?path, "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to load .env"),
    }

    match args.command {
        Some(CliCommand::Search {
            term,
            grouped,
            catalog,
        }) => {
            config.merge(ConfigOverrides {
                catalog_path: catalog,
                ..Default::default()
            });
            run_search(&config, term.as_deref(), grouped).await
        }
        Some(CliCommand::Serve {
            port,
            bind,
            catalog,
        }) => {
            config.merge(ConfigOverrides {
                bind,
                port,
                catalog_path: catalog,
            });
            serve(&config).await
        }
        None => serve(&config).await,
    }
}
