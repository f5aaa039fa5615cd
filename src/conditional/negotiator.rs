//! Full vs. not-modified decision.

use crate::conditional::fingerprint::Validator;

/// Outcome of conditional negotiation for one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Negotiation {
    /// Client copy is current; send no body.
    NotModified { validator: Validator },
    /// Send the payload along with its validator.
    Full { validator: Validator, payload: Vec<u8> },
}

impl Negotiation {
    pub fn validator(&self) -> &Validator {
        match self {
            Negotiation::NotModified { validator } | Negotiation::Full { validator, .. } => validator,
        }
    }

    pub fn is_not_modified(&self) -> bool {
        matches!(self, Negotiation::NotModified { .. })
    }
}

/// Decide how to answer given the payload and the client's `If-None-Match`.
pub fn negotiate(payload: Vec<u8>, if_none_match: Option<&str>) -> Negotiation {
    let validator = Validator::compute(&payload);

    match if_none_match {
        Some(client) if validator.matches(client) => Negotiation::NotModified { validator },
        _ => Negotiation::Full { validator, payload },
    }
}
