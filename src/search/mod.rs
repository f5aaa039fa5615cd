//! Search subsystem.
//!
//! # Data Flow
//! ```text
//! query parameters
//!     → filter.rs (parse into Filter, drop malformed age)
//!     → engine.rs (id short-circuit, then scored general pass)
//!     → ranker.rs (stable sort by tier)
//!     → SearchResults (ranked records + serialized payload)
//! ```
//!
//! # Design Decisions
//! - The pipeline returns `Result`; mapping failures to HTTP happens only at
//!   the boundary
//! - The serialized payload is produced here so the bytes that are
//!   fingerprinted are exactly the bytes that are sent

pub mod engine;
pub mod filter;
pub mod ranker;
pub mod types;

use thiserror::Error;

pub use engine::MatchEngine;
pub use filter::Filter;
pub use types::{ScoredMatch, Tier};

use crate::store::{Record, RecordStore};

/// Failures inside the search pipeline.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type SearchResult<T> = Result<T, SearchError>;

/// Ranked results of one search, with their wire encoding.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    pub matches: Vec<ScoredMatch<'a>>,
    pub payload: Vec<u8>,
}

impl<'a> SearchResults<'a> {
    /// Matched records in ranked order.
    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.matches.iter().map(|m| m.record)
    }
}

/// Match, rank and encode the records satisfying `filter`.
pub fn search<'a>(store: &'a RecordStore, filter: &Filter) -> SearchResult<SearchResults<'a>> {
    let matches = ranker::rank(MatchEngine::new(filter).run(store.records()));

    let records: Vec<&Record> = matches.iter().map(|m| m.record).collect();
    let payload = serde_json::to_vec(&records)?;

    tracing::debug!(matches = matches.len(), "Search completed");
    Ok(SearchResults { matches, payload })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            Record::new("1", "Alice Smith", 30, "Engineer"),
            Record::new("2", "Bob", 31, "Doctor"),
            Record::new("3", "Alicia", 45, "Engineer"),
        ])
        .unwrap()
    }

    fn ids(results: &SearchResults<'_>) -> Vec<String> {
        results.records().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_name_query() {
        let store = store();
        let filter = Filter {
            name: Some("alic".into()),
            ..Default::default()
        };

        let results = search(&store, &filter).unwrap();
        assert_eq!(ids(&results), vec!["1", "3"]);
        assert!(results.matches.iter().all(|m| m.tier == Tier::Name));
    }

    #[test]
    fn test_id_precedence_with_name() {
        let store = store();
        let filter = Filter {
            id: Some("2".into()),
            name: Some("alic".into()),
            ..Default::default()
        };

        let results = search(&store, &filter).unwrap();
        assert_eq!(ids(&results), vec!["2", "1", "3"]);
        assert_eq!(results.matches[0].tier, Tier::Id);
    }

    #[test]
    fn test_ranking_across_tiers() {
        let store = store();
        // "3" matches occupation only, "2" matches age only, "1" matches both.
        let filter = Filter {
            age: Some(31),
            occupation: Some("engineer".into()),
            ..Default::default()
        };

        let results = search(&store, &filter).unwrap();
        assert_eq!(ids(&results), vec!["1", "2", "3"]);
        assert_eq!(
            results.matches.iter().map(|m| m.tier).collect::<Vec<_>>(),
            vec![Tier::Age, Tier::Age, Tier::Occupation]
        );
    }

    #[test]
    fn test_payload_matches_ranked_records() {
        let store = store();
        let filter = Filter {
            id: Some("3".into()),
            ..Default::default()
        };

        let results = search(&store, &filter).unwrap();
        let decoded: Vec<Record> = serde_json::from_slice(&results.payload).unwrap();
        assert_eq!(decoded, vec![Record::new("3", "Alicia", 45, "Engineer")]);
    }

    #[test]
    fn test_empty_filter_encodes_empty_array() {
        let store = store();
        let results = search(&store, &Filter::default()).unwrap();
        assert!(results.matches.is_empty());
        assert_eq!(results.payload, b"[]");
    }
}
