//! # Structured-Config Parser — Flat Key/Value Extraction
//!
//! SEB configuration files are plist XML, but the Config Key algorithm does
//! not read them as a tree. Every element is visited in document order
//! regardless of nesting depth, and pairing is driven by a two-state
//! register: a `<key>` element latches the entry name, and the very next
//! element of any kind supplies the value. Keys buried inside `<dict>`
//! elements nested in arrays therefore surface in the flat map, while the
//! arrays themselves collapse to `[]`.
//!
//! Unrecognized value tags (`dict`, `data`, `date`, ...) consume the pending
//! key without producing an entry — a leniency the reference algorithm
//! relies on, preserved here for hash parity.

use crate::config::{ConfigMap, ConfigValue};
use crate::error::ParseError;

/// Parse a SEB plist document into a flat configuration map.
///
/// # Errors
///
/// `ParseError::Malformed` when the document is not well-formed XML;
/// `ParseError::InvalidInteger` when an `<integer>` element paired with a
/// key holds non-numeric text.
pub fn parse_config(document: &str) -> Result<ConfigMap, ParseError> {
    // Real .seb exports carry the Apple plist DOCTYPE, which roxmltree
    // rejects unless DTDs are explicitly allowed.
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(document, options)?;
    let mut map = ConfigMap::new();
    let mut pending_key: Option<String> = None;

    for node in doc.root().descendants().filter(|n| n.is_element()) {
        let tag = node.tag_name().name();

        // A <key> always (re)latches the register, even when the previous
        // key is still waiting for its value — the earlier key is lost.
        if tag == "key" {
            pending_key = Some(element_text(&node).to_owned());
            continue;
        }

        let Some(key) = pending_key.take() else {
            continue;
        };

        let value = match tag {
            "true" => Some(ConfigValue::Bool(true)),
            "false" => Some(ConfigValue::Bool(false)),
            "array" => Some(ConfigValue::EmptyArray),
            "string" => Some(ConfigValue::Text(element_text(&node).to_owned())),
            "integer" => Some(ConfigValue::Integer(parse_integer(
                &key,
                element_text(&node),
            )?)),
            _ => None,
        };

        if let Some(value) = value {
            map.insert(key, value);
        }
    }

    // A trailing <key> with no following element is silently dropped.
    tracing::debug!(entries = map.len(), "parsed configuration document");
    Ok(map)
}

/// The character data preceding the element's first child element, with
/// entities already resolved. An element with no leading text yields `""`.
fn element_text<'a>(node: &roxmltree::Node<'a, '_>) -> &'a str {
    node.text().unwrap_or("")
}

fn parse_integer(key: &str, text: &str) -> Result<i64, ParseError> {
    text.trim()
        .parse::<i64>()
        .map_err(|source| ParseError::InvalidInteger {
            key: key.to_owned(),
            text: text.to_owned(),
            source,
        })
}
