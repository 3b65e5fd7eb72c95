//! Merged GeoJSON output.

use crate::domain::GeoJsonDocument;
use crate::error::{MergeError, MergeResult};
use std::path::Path;

/// Pretty-print with two-space indentation; non-ASCII text is written as-is.
pub fn render_geojson(doc: &GeoJsonDocument) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

/// Write the document to `path`, replacing any existing file.
pub fn write_geojson(path: &Path, doc: &GeoJsonDocument) -> MergeResult<()> {
    let rendered = render_geojson(doc)
        .map_err(|source| MergeError::Render { path: path.to_path_buf(), source })?;
    std::fs::write(path, rendered).map_err(|e| MergeError::io(path, e))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_two_space_indent_and_unescaped_unicode() {
        let doc = json!({"features": [{"properties": {"CDTFA_CITY": "San José"}}]});
        let text = render_geojson(&doc).unwrap();
        assert!(text.contains("\n  \"features\": ["));
        assert!(text.contains("San José"));
        assert!(!text.contains("\\u00e9"));
    }

    #[test]
    fn test_key_order_preserved() {
        let doc: GeoJsonDocument =
            serde_json::from_str(r#"{"type":"FeatureCollection","name":"cities","features":[]}"#)
                .unwrap();
        let text = render_geojson(&doc).unwrap();
        let type_at = text.find("\"type\"").unwrap();
        let name_at = text.find("\"name\"").unwrap();
        let features_at = text.find("\"features\"").unwrap();
        assert!(type_at < name_at && name_at < features_at);
    }

    #[test]
    fn test_write_overwrites_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("cities_final.json");
        fs::write(&path, "old contents that are much longer than the new ones").expect("write");

        write_geojson(&path, &json!({"features": []})).expect("write geojson");
        let written = fs::read_to_string(&path).expect("read");
        assert_eq!(written, "{\n  \"features\": []\n}");
    }
}
