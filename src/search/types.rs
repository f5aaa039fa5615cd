//! Search system types.

use crate::store::Record;

/// Priority tier of a match. Lower is more relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Exact id match.
    Id = 0,
    /// Case-insensitive substring of the name.
    Name = 1,
    /// Age within one year of the requested age.
    Age = 2,
    /// Case-insensitive substring of the occupation.
    Occupation = 3,
    /// Starting tier before any criterion fires.
    Unranked = 4,
}

/// A record paired with the tier it matched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch<'a> {
    pub record: &'a Record,
    pub tier: Tier,
}

impl<'a> ScoredMatch<'a> {
    pub fn new(record: &'a Record, tier: Tier) -> Self {
        Self { record, tier }
    }
}
