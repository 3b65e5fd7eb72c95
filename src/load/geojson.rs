//! GeoJSON document loading.

use crate::domain::GeoJsonDocument;
use crate::error::{InputKind, MergeError, MergeResult};
use crate::utils::read_utf8_file;
use serde_json::Value;
use std::path::Path;

pub fn load_geojson(path: &Path) -> MergeResult<GeoJsonDocument> {
    let content = read_utf8_file(path)?;
    parse_geojson(&content, path)
}

/// Parse a GeoJSON document. The top level must be an object; a `features`
/// member, when present, must be an array.
pub fn parse_geojson(content: &str, path: &Path) -> MergeResult<GeoJsonDocument> {
    let doc: Value = serde_json::from_str(content).map_err(|e| MergeError::Parse {
        kind: InputKind::GeoJson,
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let invalid = |message: &str| MergeError::Parse {
        kind: InputKind::GeoJson,
        path: path.to_path_buf(),
        message: message.to_string(),
    };
    let Some(object) = doc.as_object() else {
        return Err(invalid("top-level value is not an object"));
    };
    match object.get("features") {
        None | Some(Value::Array(_)) => {}
        Some(_) => return Err(invalid("'features' is not an array")),
    }

    tracing::debug!("Parsed {} features from {}", feature_count(&doc), path.display());
    Ok(doc)
}

/// Number of features; a document without `features` has none.
pub fn feature_count(doc: &GeoJsonDocument) -> usize {
    doc.get("features").and_then(Value::as_array).map_or(0, Vec::len)
}
