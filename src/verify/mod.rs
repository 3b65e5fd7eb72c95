//! Read-only summary of a merged document.

use crate::config::FOREIGN_BORN_TOTAL_KEY;
use crate::domain::{GeoJsonDocument, SampleFeature, VerifySummary};
use crate::error::{InputKind, MergeError, MergeResult};
use crate::load::{feature_count, load_geojson};
use serde_json::{Map, Value};
use std::path::Path;

pub fn verify_file(path: &Path) -> MergeResult<VerifySummary> {
    if !path.exists() {
        return Err(MergeError::MissingFile { kind: InputKind::GeoJson, path: path.to_path_buf() });
    }
    let doc = load_geojson(path)?;
    Ok(summarize(&doc))
}

/// Count features whose `Foreign Born - Total Pop` is set and sample the first.
pub fn summarize(doc: &GeoJsonDocument) -> VerifySummary {
    let mut with_data = doc
        .get("features")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|feature| feature.get("properties").and_then(Value::as_object))
        .filter(|props| props.get(FOREIGN_BORN_TOTAL_KEY).is_some_and(|v| !v.is_null()));

    let sample = with_data.next().map(sample_feature);
    let with_demographics = usize::from(sample.is_some()) + with_data.count();

    VerifySummary { total_features: feature_count(doc), with_demographics, sample }
}

fn sample_feature(props: &Map<String, Value>) -> SampleFeature {
    let field = |key: &str| props.get(key).cloned().unwrap_or(Value::Null);
    SampleFeature {
        name: field("NAMELSAD"),
        population: field("Population"),
        foreign_born: field(FOREIGN_BORN_TOTAL_KEY),
        latino: field("Latino"),
        white: field("White"),
        black: field("Black"),
        asian: field("Asian"),
    }
}
