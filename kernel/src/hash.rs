//! Canonical content hashing with domain separation.
//!
//! Every digest in the workspace flows through [`canonical_hash`]:
//! `sha256(domain_prefix || data)`, rendered as `"sha256:<hex>"`.

use sha2::{Digest, Sha256};

use crate::stack::PlateStack;

/// Domain prefix for plate stack fingerprints.
pub const DOMAIN_PLATE_STACK: &[u8] = b"PANCAKE::PLATE_STACK::V1\0";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hasher.finalize();
    let full = format!("sha256:{}", hex::encode(digest));
    ContentHash { full, colon: 6 }
}

/// Fingerprint of a stack's plate order (little-endian `u32` per plate).
#[must_use]
pub fn stack_fingerprint(stack: &PlateStack) -> ContentHash {
    let bytes: Vec<u8> = stack
        .plates()
        .iter()
        .flat_map(|plate| plate.to_le_bytes())
        .collect();
    canonical_hash(DOMAIN_PLATE_STACK, &bytes)
}
