//! Suppression collaborator interface.
//!
//! The scanner itself reports every match it finds; filtering
//! already-accepted warnings is the caller's job. This module defines
//! the contract that layer programs against: content is identified by
//! an MD5 signature, so a previously accepted file or string
//! automatically becomes un-suppressed the moment its content changes.

use std::collections::HashSet;

use md5::{Digest, Md5};
use serde::Serialize;

/// Unique identifier of a suppressible item, derived from its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Signature(String);

impl Signature {
    /// Signature of a block of content.
    pub fn of(content: &[u8]) -> Self {
        let digest = Md5::digest(content);
        Self(hex::encode(digest))
    }

    /// Signature from an already computed hex digest, e.g. one read
    /// from a caller-maintained suppression file.
    pub fn from_hex(digest: impl Into<String>) -> Self {
        Self(digest.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Decides whether a warning's content signature has been accepted
/// before and should be dropped from caller output.
pub trait SuppressionList {
    fn is_suppressed(&self, signature: &Signature) -> bool;
}

/// The empty suppression list: nothing is ever dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSuppressions;

impl SuppressionList for NoSuppressions {
    fn is_suppressed(&self, _signature: &Signature) -> bool {
        false
    }
}

impl SuppressionList for HashSet<Signature> {
    fn is_suppressed(&self, signature: &Signature) -> bool {
        self.contains(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_stable_md5_hex() {
        let sig = Signature::of(b"aws=AKIA7362373827372737");
        assert_eq!(sig, Signature::of(b"aws=AKIA7362373827372737"));
        assert_eq!(sig.as_str().len(), 32);
        assert!(sig.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_changed_content_changes_signature() {
        assert_ne!(Signature::of(b"one secret"), Signature::of(b"one secret "));
    }

    #[test]
    fn test_no_suppressions_never_suppresses() {
        assert!(!NoSuppressions.is_suppressed(&Signature::of(b"anything")));
    }

    #[test]
    fn test_hash_set_suppression() {
        let accepted = Signature::of(b"known fine string");
        let list: HashSet<Signature> = [accepted.clone()].into_iter().collect();

        assert!(list.is_suppressed(&accepted));
        assert!(!list.is_suppressed(&Signature::of(b"something new")));
    }

    #[test]
    fn test_from_hex_normalizes_case() {
        let sig = Signature::of(b"content");
        let upper = Signature::from_hex(sig.as_str().to_uppercase());
        assert_eq!(sig, upper);
    }
}
