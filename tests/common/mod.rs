//! Shared utilities for integration tests.

use axum::{body::Body, http::Request, Router};
use phasebook::{HttpServer, Record, RecordStore, ServiceConfig, Shutdown};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// The three-record store used throughout the search examples.
pub fn sample_store() -> RecordStore {
    RecordStore::from_records(vec![
        Record::new("1", "Alice Smith", 30, "Engineer"),
        Record::new("2", "Bob", 31, "Doctor"),
        Record::new("3", "Alicia", 45, "Engineer"),
    ])
    .unwrap()
}

/// In-process router over a store, no socket involved.
#[allow(dead_code)]
pub fn router(store: RecordStore) -> Router {
    HttpServer::new(ServiceConfig::default(), store).router()
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Start a server on an ephemeral port. Triggering the returned coordinator
/// stops it.
#[allow(dead_code)]
pub async fn spawn_server(store: RecordStore) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}
