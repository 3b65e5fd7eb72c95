//! Error taxonomy for loading and merging.

use std::path::PathBuf;
use thiserror::Error;

/// Which input a missing file was expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    GeoJson,
    Csv,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::GeoJson => write!(f, "GeoJSON"),
            InputKind::Csv => write!(f, "CSV"),
        }
    }
}

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("{kind} file not found: {}", .path.display())]
    MissingFile { kind: InputKind, path: PathBuf },

    #[error("Failed to parse {kind} document {}: {message}", .path.display())]
    Parse { kind: InputKind, path: PathBuf, message: String },

    #[error("{} is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },

    #[error(
        "Could not find 'CDTFA_CITY' or 'City_Name' column in CSV. Available columns: {available:?}"
    )]
    Schema { available: Vec<String> },

    #[error("Failed to serialize output document for {}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MergeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Io { path: path.into(), source }
    }
}

pub type MergeResult<T> = std::result::Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_is_not_reported_as_io() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MergeError::Render { path: PathBuf::from("cities_final.json"), source };
        let message = err.to_string();
        assert!(message.contains("Failed to serialize output document"));
        assert!(!message.contains("I/O"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
