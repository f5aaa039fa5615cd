//! Payload fingerprints used as entity tags.

use sha2::{Digest, Sha256};
use std::fmt;

/// Deterministic fingerprint of a response payload.
///
/// Stored as lowercase hex; rendered as a quoted strong entity tag on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Validator(String);

impl Validator {
    /// Fingerprint a payload.
    pub fn compute(payload: &[u8]) -> Self {
        let digest = Sha256::digest(payload);
        Self(hex::encode(digest))
    }

    /// The bare digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `ETag` response header.
    pub fn to_etag(&self) -> String {
        format!("\"{}\"", self.0)
    }

    /// Check an `If-None-Match` header value against this validator.
    ///
    /// Accepts the tag quoted or bare, a comma-separated list, and weak tags
    /// (`W/` prefix). Only a tag equal to this fingerprint matches; `*` does not.
    pub fn matches(&self, if_none_match: &str) -> bool {
        if_none_match.split(',').map(str::trim).any(|candidate| {
            let candidate = candidate.strip_prefix("W/").unwrap_or(candidate);
            let candidate = candidate
                .strip_prefix('"')
                .and_then(|c| c.strip_suffix('"'))
                .unwrap_or(candidate);
            candidate == self.0
        })
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let payload = br#"[{"id":"1","name":"Alice","age":30,"occupation":"Engineer"}]"#;
        assert_eq!(Validator::compute(payload), Validator::compute(payload));
    }

    #[test]
    fn test_changes_with_payload() {
        assert_ne!(Validator::compute(b"[]"), Validator::compute(b"[ ]"));
    }

    #[test]
    fn test_known_digest() {
        // sha256("[]")
        assert_eq!(
            Validator::compute(b"[]").as_str(),
            "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945"
        );
    }

    #[test]
    fn test_etag_is_quoted() {
        let v = Validator::compute(b"x");
        assert_eq!(v.to_etag(), format!("\"{}\"", v.as_str()));
    }

    #[test]
    fn test_matches_forms() {
        let v = Validator::compute(b"payload");
        let bare = v.as_str().to_string();

        assert!(v.matches(&bare));
        assert!(v.matches(&v.to_etag()));
        assert!(v.matches(&format!("W/{}", v.to_etag())));
        assert!(v.matches(&format!("\"other\", {}", v.to_etag())));
    }

    #[test]
    fn test_rejects_mismatch() {
        let v = Validator::compute(b"payload");
        assert!(!v.matches(""));
        assert!(!v.matches("\"deadbeef\""));
        assert!(!v.matches(&v.as_str()[1..]));
        assert!(!v.matches(&Validator::compute(b"other").to_etag()));
    }

    #[test]
    fn test_wildcard_is_not_a_fingerprint() {
        let v = Validator::compute(b"payload");
        assert!(!v.matches("*"));
        assert!(!v.matches("W/*"));
        assert!(!v.matches("\"*\""));
    }
}
