//! Subject color assignment.
//!
//! Default colors are handed out from [`DEFAULT_PALETTE`] by first appearance.
//! Keys are stored with their exact casing; only lookups are normalized.

use indexmap::IndexMap;
use sha2::{Digest, Sha256};

/// Palette cycled through for subjects in order of first appearance.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#4285F4", "#EA4335", "#FBBC05", "#34A853", "#673AB7", "#FF5722", "#009688", "#795548",
];

/// Insertion-ordered subject → color assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    entries: IndexMap<String, String>,
}

impl ColorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `DEFAULT_PALETTE[i % 8]` to the i-th subject.
    #[must_use]
    pub fn from_subjects<'a>(subjects: impl IntoIterator<Item = &'a str>) -> Self {
        let entries = subjects
            .into_iter()
            .zip(DEFAULT_PALETTE.iter().cycle())
            .map(|(subject, color)| (subject.to_string(), (*color).to_string()))
            .collect();
        Self { entries }
    }

    /// Add or override entries by exact subject string.
    ///
    /// Overridden subjects keep their position; new subjects are appended.
    pub fn merge<K, V>(&mut self, colors: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (subject, color) in colors {
            self.entries.insert(subject.into(), color.into());
        }
    }

    /// Exact-key lookup, no normalization.
    #[must_use]
    pub fn get(&self, subject: &str) -> Option<&str> {
        self.entries.get(subject).map(String::as_str)
    }

    /// Case- and surrounding-whitespace-insensitive lookup. The first entry
    /// in insertion order whose normalized key matches wins.
    #[must_use]
    pub fn find(&self, subject: &str) -> Option<&str> {
        let wanted = normalize(subject);
        self.entries
            .iter()
            .find(|(key, _)| normalize(key) == wanted)
            .map(|(_, color)| color.as_str())
    }

    /// Color for a subject: a normalized map match, else a hash-derived color.
    #[must_use]
    pub fn color_for(&self, subject: &str) -> String {
        self.find(subject)
            .map_or_else(|| hash_color(subject), str::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(subject: &str) -> String {
    subject.trim().to_lowercase()
}

/// Stable color derived from the exact subject string: `#` followed by the
/// first six hex digits of its SHA-256 digest.
#[must_use]
pub fn hash_color(subject: &str) -> String {
    let digest = Sha256::digest(subject.as_bytes());
    format!("#{:02x}{:02x}{:02x}", digest[0], digest[1], digest[2])
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
