//! Conditional response negotiation.
//!
//! # Data Flow
//! ```text
//! serialized result payload
//!     → fingerprint.rs (SHA-256 → Validator)
//!     → negotiator.rs (compare with If-None-Match)
//!     → NotModified (empty body) | Full (payload + ETag)
//! ```
//!
//! # Design Decisions
//! - Validators are recomputed on every request; nothing is cached server-side
//! - Fingerprinting is a pure function of the payload bytes

pub mod fingerprint;
pub mod negotiator;

pub use fingerprint::Validator;
pub use negotiator::{negotiate, Negotiation};
