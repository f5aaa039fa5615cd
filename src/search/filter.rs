//! Query parameter parsing.
//!
//! # Design Decisions
//! - Empty values are treated as absent
//! - An unparsable age drops the age criterion instead of failing the request
//! - Unknown parameters are ignored

use std::collections::HashMap;

pub const PARAM_ID: &str = "id";
pub const PARAM_NAME: &str = "name";
pub const PARAM_AGE: &str = "age";
pub const PARAM_OCCUPATION: &str = "occupation";

/// Typed search criteria for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub id: Option<String>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub occupation: Option<String>,
}

impl Filter {
    /// Build a filter from raw query parameters.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            id: non_empty(params.get(PARAM_ID)),
            name: non_empty(params.get(PARAM_NAME)),
            age: params.get(PARAM_AGE).and_then(|raw| parse_age(raw)),
            occupation: non_empty(params.get(PARAM_OCCUPATION)),
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

fn parse_age(raw: &str) -> Option<i64> {
    if raw.is_empty() {
        return None;
    }
    match raw.trim().parse::<i64>() {
        Ok(age) => Some(age),
        Err(e) => {
            tracing::debug!(value = %raw, error = %e, "Ignoring malformed age parameter");
            None
        }
    }
}
