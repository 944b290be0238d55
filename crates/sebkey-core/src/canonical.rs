//! # Canonical Serializer — Byte-Stable JSON Text
//!
//! Renders an [`OrderedConfig`] as a single-line JSON object whose member
//! order matches the canonical key order exactly, then deletes every ASCII
//! space (0x20) and newline (0x0A) from the full text — including ones
//! inside string values. The strip is a blunt character deletion, not a
//! structural minify: a value `"hello world"` hashes as `"helloworld"`.
//! That is an upstream quirk of the reference algorithm, and reproducing it
//! literally is what keeps the final hash compatible. Do not "fix" it.
//!
//! String escaping is byte-exact with the reference encoder's ASCII-only
//! output: short escapes for the usual control characters, `\u00xx` for the
//! rest below 0x20, and `\uxxxx` (surrogate pairs above U+FFFF, lowercase
//! hex) for everything non-ASCII.
//!
//! The inner string is private. The only constructor runs the full
//! serialization pipeline, so a digest can only ever be computed over
//! correctly canonicalized text.

use crate::config::{ConfigValue, OrderedConfig};

/// Canonical single-line JSON rendering of an ordered configuration.
///
/// # Invariants
///
/// - Valid JSON object syntax, members in canonical key order.
/// - ASCII only.
/// - Contains no 0x20 or 0x0A bytes anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalText(String);

impl CanonicalText {
    /// Serialize the ordered entries and strip spaces and newlines.
    pub fn render(config: &OrderedConfig<'_>) -> Self {
        let mut json = String::with_capacity(config.len() * 24 + 2);
        json.push('{');
        for (i, (key, value)) in config.iter().enumerate() {
            if i > 0 {
                json.push(',');
            }
            push_json_string(&mut json, key);
            json.push(':');
            match value {
                ConfigValue::Bool(true) => json.push_str("true"),
                ConfigValue::Bool(false) => json.push_str("false"),
                ConfigValue::Integer(n) => json.push_str(&n.to_string()),
                ConfigValue::Text(s) => push_json_string(&mut json, s),
                ConfigValue::EmptyArray => json.push_str("[]"),
            }
        }
        json.push('}');

        // The reference deletes these characters from the finished text,
        // string contents included. Escapes are unaffected: a newline in a
        // value is already the two characters `\n` at this point, and only
        // literal 0x20/0x0A bytes are removed.
        let stripped = json.chars().filter(|&c| c != ' ' && c != '\n').collect();
        Self(stripped)
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The UTF-8 bytes fed to the first digest.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length of the canonical text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the text holds no bytes. [`render`](Self::render) always
    /// produces at least `{}`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalText {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Append `value` as an ASCII-only JSON string literal.
fn push_json_string(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{0c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c if c.is_ascii() => out.push(c),
            c => {
                // Non-ASCII escapes as UTF-16 code units, one \uxxxx each.
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units).iter() {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
        }
    }
    out.push('"');
}
