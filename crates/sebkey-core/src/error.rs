//! # Error Types — Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. Both error kinds are fatal to an invocation: the pipeline
//! never retries and never produces a partial hash, because a partially
//! processed configuration would hash to a value the exam endpoint rejects
//! silently.
//!
//! Unrecognized value tags are deliberately NOT an error. The reference
//! algorithm skips them, and upgrading the skip to a failure would reject
//! documents that hash perfectly well.

use thiserror::Error;

/// Top-level error for the Config Key pipeline.
#[derive(Error, Debug)]
pub enum ConfigKeyError {
    /// The configuration document could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The parsed configuration lacks a usable `startURL`.
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

/// Error while parsing the plist configuration document.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The document is not well-formed XML.
    #[error("malformed configuration document: {0}")]
    Malformed(#[from] roxmltree::Error),

    /// An `<integer>` element whose text content is not a base-10 integer.
    #[error("integer value for key {key:?} is not numeric: {text:?}")]
    InvalidInteger {
        /// The key the element was paired with.
        key: String,
        /// The element's verbatim text content.
        text: String,
        /// The underlying parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Error raised when the `startURL` entry needed for the second digest is
/// absent or carries the wrong type.
#[derive(Error, Debug)]
pub enum MissingFieldError {
    /// The configuration has no entry under the given key.
    #[error("configuration has no {0:?} entry")]
    Absent(&'static str),

    /// The entry exists but is not a string value.
    #[error("configuration entry {key:?} is {found}, expected a string")]
    WrongType {
        /// The key that was looked up.
        key: &'static str,
        /// Human-readable description of the value actually stored.
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_includes_key_and_text() {
        let source = "x".parse::<i64>().unwrap_err();
        let err = ParseError::InvalidInteger {
            key: "taskBarHeight".to_owned(),
            text: "forty".to_owned(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("taskBarHeight"));
        assert!(msg.contains("forty"));
    }

    #[test]
    fn missing_field_display() {
        let err = MissingFieldError::Absent("startURL");
        assert_eq!(err.to_string(), "configuration has no \"startURL\" entry");

        let err = MissingFieldError::WrongType {
            key: "startURL",
            found: "a boolean",
        };
        assert!(err.to_string().contains("expected a string"));
    }

    #[test]
    fn top_level_error_wraps_transparently() {
        let err = ConfigKeyError::from(MissingFieldError::Absent("startURL"));
        assert_eq!(err.to_string(), "configuration has no \"startURL\" entry");
    }
}
