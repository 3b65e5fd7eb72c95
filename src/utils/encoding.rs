//! Strict UTF-8 file reading with byte-order-mark detection.
//!
//! Inputs must be UTF-8. A leading UTF-8 BOM is reported but left in the
//! text; callers decide where it may be removed.

use crate::error::{MergeError, MergeResult};
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

pub const UTF8_BOM: char = '\u{feff}';

/// Whether `bytes` start with a UTF-8 byte-order mark.
pub fn has_utf8_bom(bytes: &[u8]) -> bool {
    matches!(Encoding::for_bom(bytes), Some((encoding, _)) if encoding == UTF_8)
}

/// Decode `bytes` as UTF-8 without replacement. Returns `None` on malformed input.
pub fn decode_utf8_strict(bytes: &[u8]) -> Option<String> {
    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}

/// Read a whole file as UTF-8 text, keeping any byte-order mark.
pub fn read_utf8_file(path: &Path) -> MergeResult<String> {
    let bytes = std::fs::read(path).map_err(|e| MergeError::io(path, e))?;
    if has_utf8_bom(&bytes) {
        tracing::debug!("{} starts with a UTF-8 byte-order mark", path.display());
    }
    decode_utf8_strict(&bytes).ok_or_else(|| MergeError::Encoding { path: path.to_path_buf() })
}
