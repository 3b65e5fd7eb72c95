//! city-demographics: merge CSV demographic columns into GeoJSON city features
//!
//! Loads a GeoJSON feature collection and a demographics CSV, joins them on
//! the city name, and writes the enriched collection back out.

pub mod config;
pub mod domain;
pub mod error;
pub mod load;
pub mod merge;
pub mod render;
pub mod utils;
pub mod verify;

pub use error::{MergeError, MergeResult};
