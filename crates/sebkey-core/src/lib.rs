//! # sebkey-core — SEB Config Key Pipeline
//!
//! Computes the Safe Exam Browser "Config Key" from a `.seb` configuration
//! file: the verification hash an exam endpoint checks in the
//! `X-SafeExamBrowser-ConfigKeyHash` HTTP header before serving a protected
//! exam. See <https://safeexambrowser.org/developer/seb-config-key.html>.
//!
//! The pipeline has four stages, each consuming only the previous stage's
//! output:
//!
//! 1. [`parse`] — the flat plist encoding becomes a typed [`ConfigMap`].
//! 2. [`ConfigMap::sorted`] — keys arranged in case-insensitive order.
//! 3. [`CanonicalText::render`] — byte-stable single-line JSON with every
//!    space and newline deleted.
//! 4. [`ConfigKeyHash::compute`] — SHA-256 of the canonical text, then
//!    SHA-256 of the start URL plus that digest's hex text.
//!
//! Every stage must be bit-exact with the reference algorithm. A divergence
//! anywhere — key order, type coercion, serialization whitespace — yields a
//! different hash and a silent authentication failure, so the quirks of the
//! reference (flat element pairing, whitespace deletion inside string
//! values, silently skipped value tags) are reproduced deliberately.
//!
//! ## Crate Policy
//!
//! - No I/O: the caller hands in the document text and receives the hashes.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod config;
pub mod digest;
pub mod error;
pub mod parse;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalText;
pub use config::{ConfigMap, ConfigValue, OrderedConfig, START_URL_KEY};
pub use digest::{ConfigKeyHash, CONFIG_KEY_HEADER};
pub use error::{ConfigKeyError, MissingFieldError, ParseError};

/// Run the full pipeline over a configuration document.
///
/// The start URL is taken from the original, pre-ordering map; both digests
/// are computed over the canonical serialization of the sorted entries.
///
/// # Errors
///
/// [`ConfigKeyError::Parse`] when the document is malformed,
/// [`ConfigKeyError::MissingField`] when `startURL` is absent or not a
/// string.
pub fn config_key_for_document(document: &str) -> Result<ConfigKeyHash, ConfigKeyError> {
    let map = parse::parse_config(document)?;
    let start_url = map.start_url()?;
    let canonical = CanonicalText::render(&map.sorted());
    tracing::debug!(
        canonical_len = canonical.len(),
        "canonicalized configuration"
    );
    Ok(ConfigKeyHash::compute(start_url, &canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>startURL</key>
    <string>https://example.com/exam</string>
    <key>browserWindowAllowReload</key>
    <true/>
</dict>
</plist>"#;

    #[test]
    fn pipeline_end_to_end() {
        let hash = config_key_for_document(EXAMPLE).unwrap();
        assert_eq!(
            hash.config_key,
            "ee2cc5173212a46114ce277da14efeab5e450d535d3c22b826e4e9c0e7aba958"
        );
    }

    #[test]
    fn pipeline_is_deterministic() {
        let a = config_key_for_document(EXAMPLE).unwrap();
        let b = config_key_for_document(EXAMPLE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_start_url_fails() {
        let doc = r#"<plist><dict><key>allowQuit</key><true/></dict></plist>"#;
        let err = config_key_for_document(doc).unwrap_err();
        assert!(matches!(
            err,
            ConfigKeyError::MissingField(MissingFieldError::Absent(_))
        ));
    }

    #[test]
    fn non_string_start_url_fails() {
        let doc = r#"<plist><dict><key>startURL</key><integer>1</integer></dict></plist>"#;
        let err = config_key_for_document(doc).unwrap_err();
        assert!(matches!(
            err,
            ConfigKeyError::MissingField(MissingFieldError::WrongType { .. })
        ));
    }
}
