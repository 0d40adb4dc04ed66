//! Trait set model and source loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One named trait slot.
///
/// `data` is the compressed hex payload; it is absent (or empty) when the
/// slot was left unfilled upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitEntry {
    pub name: String,
    #[serde(default)]
    pub data: Option<String>,
}

/// Ordered set of trait slots.
///
/// File order is the fixed iteration order used by both the preview builder
/// and the store workflow, so record hashes always come out in the same
/// sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitSet(Vec<TraitEntry>);

/// Errors reading the trait source file.
#[derive(Debug, Error)]
pub enum TraitSourceError {
    #[error("failed to read trait source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse trait source: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TraitSet {
    pub fn from_entries(entries: Vec<TraitEntry>) -> Self {
        Self(entries)
    }

    /// Load a trait set from a JSON array file.
    pub fn load(path: &Path) -> Result<Self, TraitSourceError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn entries(&self) -> &[TraitEntry] {
        &self.0
    }

    /// Trait slots that actually carry a payload, in set order.
    ///
    /// An empty string counts as no payload, matching the upstream editor
    /// which stores cleared slots either way.
    pub fn non_empty(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().filter_map(|e| match e.data.as_deref() {
            Some(d) if !d.is_empty() => Some((e.name.as_str(), d)),
            _ => None,
        })
    }

    pub fn non_empty_count(&self) -> usize {
        self.non_empty().count()
    }
}
