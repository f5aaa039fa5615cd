//! Result ordering.
//!
//! Matches are ordered by ascending tier with a stable sort: records that
//! share a tier keep the order the engine emitted them in, which is store
//! order. Tie order is part of the response contract.

use crate::search::types::ScoredMatch;

/// Stable sort by ascending tier.
pub fn rank(mut matches: Vec<ScoredMatch<'_>>) -> Vec<ScoredMatch<'_>> {
    matches.sort_by_key(|m| m.tier);
    matches
}
