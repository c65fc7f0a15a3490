//! Case-insensitive name filtering for catalog ingestion.

use serde::{Deserialize, Serialize};

/// A normalized name filter: trimmed and case-folded once at construction.
///
/// An empty filter means "load no stars and no deep-sky objects"; the
/// solar-system bodies ignore it entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameFilter {
    normalized: String,
}

impl NameFilter {
    pub fn new(text: &str) -> Self {
        Self {
            normalized: text.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Case-insensitive substring match against a display name.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}
