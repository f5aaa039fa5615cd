//! phasebook: profile search over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /search?name=..&age=..   ┌──────────────────────────────────────────────┐
//!     ─────────────────────────────┼─▶ filter ──▶ engine ──▶ ranker ──▶ encode    │
//!                                  │      (parse)   (score)    (stable)   (JSON)  │
//!                                  │                                      │       │
//!     200 + ETag | 304             │                                      ▼       │
//!     ◀────────────────────────────┼────────────────────────────── conditional   │
//!                                  │                              (fingerprint)   │
//!                                  │                                              │
//!                                  │  record store: loaded once, shared read-only │
//!                                  └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;

use phasebook::lifecycle::{resolve_config, Overrides, Shutdown};
use phasebook::observability::{logging, metrics};
use phasebook::store::load_records;
use phasebook::HttpServer;

#[derive(Parser)]
#[command(name = "phasebook")]
#[command(about = "Ranked profile search with conditional responses", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override data.records_path.
    #[arg(short, long)]
    records: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let overrides = Overrides {
        records_path: args.records,
        bind_address: args.bind,
    };
    let config = resolve_config(args.config.as_deref(), overrides)?;

    logging::init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "phasebook starting");

    let store = load_records(Path::new(&config.data.records_path))?;
    if store.is_empty() {
        tracing::warn!(
            records_path = %config.data.records_path,
            "Record store is empty; every search will return an empty list"
        );
    }
    tracing::info!(
        bind_address = %config.listener.bind_address,
        records_path = %config.data.records_path,
        records = store.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
