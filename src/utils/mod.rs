//! Shared helpers.

pub mod encoding;

pub use encoding::{read_utf8_file, UTF8_BOM};
