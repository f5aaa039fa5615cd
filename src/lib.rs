//! Profile search service library.

pub mod conditional;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod search;
pub mod store;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{Record, RecordStore};
