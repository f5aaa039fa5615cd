//! Record matching and scoring.
//!
//! # Responsibilities
//! - Resolve an exact id match ahead of everything else
//! - Evaluate name, age and occupation criteria against every other record
//! - Assign each matching record the best tier among criteria that fired
//!
//! # Design Decisions
//! - Criteria are independent (rule, tier) pairs folded to the minimum tier,
//!   so evaluation order never affects the result
//! - Text criteria are lowercased once per request, not once per record
//! - All state is request-scoped

use std::collections::HashSet;

use crate::search::filter::Filter;
use crate::search::types::{ScoredMatch, Tier};
use crate::store::Record;

/// One general-pass criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Criterion {
    /// Lowercased needle for the name.
    Name(String),
    /// Requested age; matches within one year either side.
    Age(i64),
    /// Lowercased needle for the occupation.
    Occupation(String),
}

impl Criterion {
    fn tier(&self) -> Tier {
        match self {
            Criterion::Name(_) => Tier::Name,
            Criterion::Age(_) => Tier::Age,
            Criterion::Occupation(_) => Tier::Occupation,
        }
    }

    fn matches(&self, record: &Record) -> bool {
        match self {
            Criterion::Name(needle) => record.name.to_lowercase().contains(needle.as_str()),
            Criterion::Age(target) => {
                (target.saturating_sub(1)..=target.saturating_add(1)).contains(&record.age)
            }
            Criterion::Occupation(needle) => {
                record.occupation.to_lowercase().contains(needle.as_str())
            }
        }
    }
}

/// Compiled criteria for a single request.
#[derive(Debug, Clone)]
pub struct MatchEngine<'f> {
    id: Option<&'f str>,
    criteria: Vec<Criterion>,
}

impl<'f> MatchEngine<'f> {
    /// Compile a filter into match rules.
    pub fn new(filter: &'f Filter) -> Self {
        let mut criteria = Vec::with_capacity(3);
        if let Some(name) = &filter.name {
            criteria.push(Criterion::Name(name.to_lowercase()));
        }
        if let Some(age) = filter.age {
            criteria.push(Criterion::Age(age));
        }
        if let Some(occupation) = &filter.occupation {
            criteria.push(Criterion::Occupation(occupation.to_lowercase()));
        }

        Self {
            id: filter.id.as_deref(),
            criteria,
        }
    }

    /// Score every record, in store order.
    ///
    /// The id match, if any, is emitted first; general-pass matches follow in
    /// store order. Each record appears at most once.
    pub fn run<'a>(&self, records: &'a [Record]) -> Vec<ScoredMatch<'a>> {
        let id_match = self.find_by_id(records);

        let mut excluded: HashSet<&str> = HashSet::new();
        let mut matches = Vec::new();
        if let Some(record) = id_match {
            excluded.insert(record.id.as_str());
            matches.push(ScoredMatch::new(record, Tier::Id));
        }

        if self.criteria.is_empty() {
            return matches;
        }

        matches.extend(
            records
                .iter()
                .filter(|record| !excluded.contains(record.id.as_str()))
                .filter_map(|record| self.score(record).map(|tier| ScoredMatch::new(record, tier))),
        );
        matches
    }

    /// First record whose id equals the requested id.
    fn find_by_id<'a>(&self, records: &'a [Record]) -> Option<&'a Record> {
        let id = self.id?;
        records.iter().find(|record| record.id == id)
    }

    /// Best tier among the criteria this record satisfies.
    fn score(&self, record: &Record) -> Option<Tier> {
        let tier = self
            .criteria
            .iter()
            .filter(|criterion| criterion.matches(record))
            .map(Criterion::tier)
            .fold(Tier::Unranked, Tier::min);

        (tier != Tier::Unranked).then_some(tier)
    }
}
