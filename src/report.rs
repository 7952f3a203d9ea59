use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;

/// Key differences of one candidate locale against the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleDiff {
    /// Keys present in the reference but absent from the candidate
    pub missing_keys: Vec<String>,
    /// Keys present in the candidate but absent from the reference
    pub extra_keys: Vec<String>,
}

impl LocaleDiff {
    /// Compute the key differences between a reference key set and a
    /// candidate key set. Both lists come out sorted.
    pub fn between(reference: &BTreeSet<String>, candidate: &BTreeSet<String>) -> Self {
        Self {
            missing_keys: reference.difference(candidate).cloned().collect(),
            extra_keys: candidate.difference(reference).cloned().collect(),
        }
    }

    /// True when the candidate's key set matches the reference exactly
    pub fn is_empty(&self) -> bool {
        self.missing_keys.is_empty() && self.extra_keys.is_empty()
    }
}

/// Audit report keyed by locale filename.
///
/// Only locales with at least one missing or extra key appear; a clean run
/// serializes as `{}`.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: BTreeMap<String, LocaleDiff>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a locale's differences; clean diffs are dropped.
    pub fn insert(&mut self, filename: impl Into<String>, diff: LocaleDiff) {
        if !diff.is_empty() {
            self.entries.insert(filename.into(), diff);
        }
    }

    pub fn get(&self, filename: &str) -> Option<&LocaleDiff> {
        self.entries.get(filename)
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.entries.contains_key(filename)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the report as indented JSON text
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
