//! Fixed merge settings
//!
//! Input and output paths, join keys and the fallback field list are
//! constants. `MergeSettings` groups them so library calls receive them
//! explicitly instead of reaching for globals.

use std::path::PathBuf;

pub const GEOJSON_PATH: &str = "cities_final.json";
pub const CSV_PATH: &str = "demographics.csv";
/// The merge overwrites its GeoJSON input.
pub const OUTPUT_PATH: &str = "cities_final.json";

/// Feature property used as the join key.
pub const JOIN_PROPERTY: &str = "CDTFA_CITY";

/// CSV columns that may hold the city name, in order of preference.
pub const CITY_KEY_COLUMNS: [&str; 2] = ["CDTFA_CITY", "City_Name"];

/// Column whose value feeds the derived foreign-born keys.
pub const FOREIGN_COLUMN: &str = "Foreign";
pub const FOREIGN_BORN_KEY: &str = "Foreign_Born";
pub const FOREIGN_BORN_TOTAL_KEY: &str = "Foreign Born - Total Pop";

/// Properties set to null on unmatched features when absent.
///
/// Kept verbatim, including the space-padded `" Other "` entry.
pub const FALLBACK_FIELDS: [&str; 17] = [
    "Households",
    "Population",
    "Latino",
    "White",
    "Black",
    "Asian",
    " Other ",
    "Latino Percent",
    "White Percent",
    "Black Percent",
    "Asian Percent",
    "Other Percent",
    "Foreign Born - Total Pop",
    "Native",
    "Foreign",
    "Foreign Born (%)",
    "Foreign_Born",
];

pub const UNMATCHED_SAMPLE_LIMIT: usize = 20;

#[derive(Debug, Clone)]
pub struct MergeSettings {
    pub geojson_path: PathBuf,
    pub csv_path: PathBuf,
    pub output_path: PathBuf,
    pub unmatched_sample_limit: usize,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            geojson_path: PathBuf::from(GEOJSON_PATH),
            csv_path: PathBuf::from(CSV_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            unmatched_sample_limit: UNMATCHED_SAMPLE_LIMIT,
        }
    }
}

impl MergeSettings {
    /// Resolve the fixed relative paths against `root`.
    pub fn rooted_at(root: &std::path::Path) -> Self {
        let defaults = Self::default();
        Self {
            geojson_path: root.join(defaults.geojson_path),
            csv_path: root.join(defaults.csv_path),
            output_path: root.join(defaults.output_path),
            unmatched_sample_limit: defaults.unmatched_sample_limit,
        }
    }
}
