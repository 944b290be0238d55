//! # Digest Chain — Config Key Computation
//!
//! Two chained SHA-256 digests. The first covers the canonical text; the
//! second covers the exam start URL immediately followed by the first
//! digest's hex rendering, no separator. The second digest is the Config
//! Key an exam endpoint checks in the `X-SafeExamBrowser-ConfigKeyHash`
//! header.
//!
//! The first digest can only be computed over [`CanonicalText`], so every
//! hash in the system flows through the canonicalization pipeline by
//! construction.

use sha2::{Digest, Sha256};

use crate::canonical::CanonicalText;

/// HTTP header name the Config Key is presented under.
pub const CONFIG_KEY_HEADER: &str = "X-SafeExamBrowser-ConfigKeyHash";

/// The two digests of the Config Key chain, both lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigKeyHash {
    /// SHA-256 of the canonical text. Intermediate value.
    pub config_hash: String,
    /// SHA-256 of `startURL` + `config_hash`. The externally meaningful
    /// output.
    pub config_key: String,
}

impl ConfigKeyHash {
    /// Compute both digests of the chain.
    pub fn compute(start_url: &str, canonical: &CanonicalText) -> Self {
        let config_hash = to_hex(Sha256::digest(canonical.as_bytes()).as_slice());

        let mut hasher = Sha256::new();
        hasher.update(start_url.as_bytes());
        hasher.update(config_hash.as_bytes());
        let config_key = to_hex(hasher.finalize().as_slice());

        Self {
            config_hash,
            config_key,
        }
    }

    /// The header line presented to the exam endpoint.
    pub fn header_line(&self) -> String {
        format!("{CONFIG_KEY_HEADER}: {}", self.config_key)
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
