//! Core data types shared by the loader, merger and reports.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// One retained CSV row: cleaned header name to raw cell text, in column order.
///
/// Duplicate header names collapse onto one key; the rightmost cell wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemographicRow {
    entries: Vec<(String, String)>,
}

impl DemographicRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, keeping the position of the first insert.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Trimmed city name to its demographic row. Later rows replace earlier ones.
pub type DemographicsIndex = HashMap<String, DemographicRow>;

/// The GeoJSON document, kept as generic JSON so unknown members survive the rewrite.
pub type GeoJsonDocument = Value;

/// Header inventory gathered while loading the CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderReport {
    /// Header names with the byte-order mark removed from the first entry.
    pub columns: Vec<String>,
    /// Names that occur more than once, with their occurrence counts.
    pub duplicates: BTreeMap<String, usize>,
    /// The column the city name is read from.
    pub city_column: String,
    /// Position of every column named exactly `Foreign`.
    pub foreign_indices: Vec<usize>,
    /// When no `Foreign` column exists: columns mentioning foreign or born.
    pub foreign_candidates: Vec<usize>,
    pub total_columns: Vec<usize>,
    pub estimate_columns: Vec<usize>,
}

impl HeaderReport {
    /// Column feeding `Foreign_Born`; the first `Foreign` by position.
    pub fn foreign_index(&self) -> Option<usize> {
        self.foreign_indices.first().copied()
    }
}

/// Result of loading the CSV.
#[derive(Debug, Clone, Default)]
pub struct Demographics {
    pub index: DemographicsIndex,
    pub headers: HeaderReport,
}

/// Counters accumulated over every feature in one merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub total_features: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// The first unmatched names, capped at the sample limit.
    pub unmatched_names: Vec<String>,
}

impl MergeStats {
    /// Count an unmatched feature, keeping its name while under `sample_limit`.
    pub fn record_unmatched(&mut self, name: &str, sample_limit: usize) {
        self.unmatched += 1;
        if self.unmatched_names.len() < sample_limit {
            self.unmatched_names.push(name.to_string());
        }
    }
}

/// Aggregate view of a merged document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerifySummary {
    pub total_features: usize,
    pub with_demographics: usize,
    pub sample: Option<SampleFeature>,
}

/// A handful of fields from the first feature carrying demographics.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleFeature {
    pub name: Value,
    pub population: Value,
    pub foreign_born: Value,
    pub latino: Value,
    pub white: Value,
    pub black: Value,
    pub asian: Value,
}
