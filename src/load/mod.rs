//! Input loading: the GeoJSON document and the demographics CSV.

pub mod demographics;
pub mod geojson;

pub use demographics::{load_demographics, parse_demographics};
pub use self::geojson::{feature_count, load_geojson, parse_geojson};
