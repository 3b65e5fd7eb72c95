//! Output rendering (merged GeoJSON, console reports)

pub mod console;
pub mod geojson;

pub use console::{render_header_report, render_merge_stats, render_verify_summary};
pub use geojson::{render_geojson, write_geojson};
