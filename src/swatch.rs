//! The generated palette: swatch names mapped to color strings.
//!
//! Entries keep insertion order. Writes go through [`Palette::insert_if_absent`],
//! so a key seeded by the caller (or produced earlier in the same build) is
//! never overwritten.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Swatch name to color string (`#rrggbb`, or `transparent`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: IndexMap<String, String>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key` unless the key already exists.
    /// Returns `true` if the value was written.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        match self.entries.entry(key.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(value.into());
                true
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pretty-printed JSON object, in insertion order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<IndexMap<String, String>> for Palette {
    fn from(entries: IndexMap<String, String>) -> Self {
        Self { entries }
    }
}

/// Later duplicates are dropped, matching [`Palette::insert_if_absent`].
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut palette = Palette::new();
        for (key, value) in iter {
            palette.insert_if_absent(key, value);
        }
        palette
    }
}
