//! # Configuration Map — Typed Key/Value Entries
//!
//! Defines `ConfigValue`, the four value shapes the Config Key algorithm
//! recognizes, and `ConfigMap`, the insertion-order-preserving mapping the
//! parser fills. The container choice matters: when two keys collide
//! case-insensitively, the canonical sort breaks the tie by the map's
//! iteration order, so that order has to be stable and observable. An
//! `IndexMap` keeps insertion order, and re-inserting an existing key
//! overwrites the value while keeping the original position.

use indexmap::IndexMap;

use crate::error::MissingFieldError;

/// Key under which the exam start URL is stored in every SEB configuration.
pub const START_URL_KEY: &str = "startURL";

/// A configuration value as the Config Key algorithm sees it.
///
/// Only these four shapes participate in the hash. Any other plist value tag
/// (`dict`, `data`, `date`, ...) produces no entry at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// A `<true/>` or `<false/>` element.
    Bool(bool),
    /// An `<integer>` element.
    Integer(i64),
    /// A `<string>` element, text content verbatim.
    Text(String),
    /// An `<array>` element. Member elements are never collected; the value
    /// always serializes as `[]`.
    EmptyArray,
}

impl ConfigValue {
    /// Human-readable description for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "a boolean",
            Self::Integer(_) => "an integer",
            Self::Text(_) => "a string",
            Self::EmptyArray => "an array",
        }
    }
}

/// The flat key/value mapping parsed out of a SEB configuration document.
///
/// Keys are unique by exact (case-sensitive) string equality; a repeated key
/// overwrites the earlier value (later wins) without moving the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap(IndexMap<String, ConfigValue>);

impl ConfigMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert an entry, overwriting any prior value under the same key.
    pub fn insert(&mut self, key: String, value: ConfigValue) {
        self.0.insert(key, value);
    }

    /// Look up an entry by exact key.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The exam start URL, read from the unordered map.
    ///
    /// # Errors
    ///
    /// `MissingFieldError` if the entry is absent or not a string.
    pub fn start_url(&self) -> Result<&str, MissingFieldError> {
        match self.get(START_URL_KEY) {
            Some(ConfigValue::Text(url)) => Ok(url),
            Some(other) => Err(MissingFieldError::WrongType {
                key: START_URL_KEY,
                found: other.type_name(),
            }),
            None => Err(MissingFieldError::Absent(START_URL_KEY)),
        }
    }

    /// Arrange the entries in canonical order: case-insensitive lexicographic
    /// comparison of the lowercased keys, by code point.
    ///
    /// The sort is stable, so keys that collide under lowercasing keep their
    /// relative insertion order. The reference leaves this tie-break
    /// unspecified; insertion order is this implementation's documented
    /// choice.
    pub fn sorted(&self) -> OrderedConfig<'_> {
        let mut entries: Vec<(&str, &ConfigValue)> = self.iter().collect();
        entries.sort_by_cached_key(|(key, _)| key.to_lowercase());
        OrderedConfig { entries }
    }
}

/// A read-only view of a [`ConfigMap`] with entries in canonical order.
///
/// Produced only by [`ConfigMap::sorted`]; the underlying map is not touched.
#[derive(Debug)]
pub struct OrderedConfig<'a> {
    entries: Vec<(&'a str, &'a ConfigValue)>,
}

impl<'a> OrderedConfig<'a> {
    /// Iterate entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a ConfigValue)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the view holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
