//! Profile record storage.
//!
//! # Data Flow
//! ```text
//! records file (JSON array)
//!     → loader.rs (read & deserialize)
//!     → RecordStore::from_records (id uniqueness check)
//!     → RecordStore (immutable, shared via Arc to all handlers)
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup; never mutated while serving
//! - Store order is preserved and is observable in search results
//! - Duplicate ids are rejected at load time, not at query time

pub mod loader;
pub mod record;

pub use loader::{load_records, StoreError};
pub use record::{Record, RecordStore};
