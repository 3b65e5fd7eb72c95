//! Join demographics into feature properties.
//!
//! Features are matched on the trimmed `CDTFA_CITY` property. A match
//! overwrites every non-key column of the city's row into the properties;
//! a miss fills the fallback fields with null where they are absent. No
//! feature is added or removed.

pub mod convert;

pub use convert::convert_value;

use crate::config::{MergeSettings, CITY_KEY_COLUMNS, FALLBACK_FIELDS, JOIN_PROPERTY};
use crate::domain::{
    DemographicRow, Demographics, DemographicsIndex, GeoJsonDocument, MergeStats,
};
use crate::error::{InputKind, MergeError, MergeResult};
use crate::load::{feature_count, load_demographics, load_geojson};
use crate::render::write_geojson;
use serde_json::{Map, Value};

/// Everything a merge run produced, for reporting.
#[derive(Debug)]
pub struct MergeOutcome {
    pub loaded_features: usize,
    pub demographics: Demographics,
    pub stats: MergeStats,
}

/// Load both inputs, merge, and overwrite the output document.
pub fn run_merge(settings: &MergeSettings) -> MergeResult<MergeOutcome> {
    ensure_exists(&settings.geojson_path, InputKind::GeoJson)?;
    ensure_exists(&settings.csv_path, InputKind::Csv)?;

    let mut doc = load_geojson(&settings.geojson_path)?;
    let loaded_features = feature_count(&doc);
    let demographics = load_demographics(&settings.csv_path)?;

    let stats = merge_demographics(&mut doc, &demographics.index, settings.unmatched_sample_limit);
    write_geojson(&settings.output_path, &doc)?;

    Ok(MergeOutcome { loaded_features, demographics, stats })
}

fn ensure_exists(path: &std::path::Path, kind: InputKind) -> MergeResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(MergeError::MissingFile { kind, path: path.to_path_buf() })
    }
}

/// Merge `index` into the document's features in place.
pub fn merge_demographics(
    doc: &mut GeoJsonDocument,
    index: &DemographicsIndex,
    sample_limit: usize,
) -> MergeStats {
    let mut stats = MergeStats::default();
    let Some(features) = doc.get_mut("features").and_then(Value::as_array_mut) else {
        return stats;
    };

    for feature in features.iter_mut() {
        stats.total_features += 1;

        // Features without a properties object are reported but never modified.
        let properties = feature.get_mut("properties").and_then(Value::as_object_mut);
        let city = properties
            .as_ref()
            .and_then(|props| props.get(JOIN_PROPERTY))
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("")
            .to_string();

        match (index.get(&city), properties) {
            (Some(row), Some(props)) => {
                apply_row(props, row);
                stats.matched += 1;
            }
            (_, props) => {
                stats.record_unmatched(&city, sample_limit);
                if let Some(props) = props {
                    fill_fallback_fields(props);
                }
            }
        }
    }

    tracing::debug!(
        "Merged {} features: {} matched, {} unmatched",
        stats.total_features,
        stats.matched,
        stats.unmatched
    );
    stats
}

fn apply_row(props: &mut Map<String, Value>, row: &DemographicRow) {
    for (key, raw) in row.iter() {
        if CITY_KEY_COLUMNS.iter().any(|column| *column == key) {
            continue;
        }
        props.insert(key.to_string(), convert_value(raw));
    }
}

fn fill_fallback_fields(props: &mut Map<String, Value>) {
    for field in FALLBACK_FIELDS {
        if !props.contains_key(field) {
            props.insert(field.to_string(), Value::Null);
        }
    }
}
