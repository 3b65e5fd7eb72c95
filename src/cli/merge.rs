//! Merge command implementation

use anyhow::{Context, Result};

use city_demographics::config::MergeSettings;
use city_demographics::merge::run_merge;
use city_demographics::render::{render_header_report, render_merge_stats};

pub fn run() -> Result<()> {
    let settings = MergeSettings::default();

    let outcome = run_merge(&settings).with_context(|| {
        format!(
            "Failed to merge {} into {}",
            settings.csv_path.display(),
            settings.geojson_path.display()
        )
    })?;

    println!("Loaded {} features from {}", outcome.loaded_features, settings.geojson_path.display());
    println!();
    print!("{}", render_header_report(&outcome.demographics.headers));
    println!();
    println!("Loaded {} demographic records", outcome.demographics.index.len());
    println!();
    print!("{}", render_merge_stats(&outcome.stats));
    println!();
    println!("Successfully saved {}", settings.output_path.display());
    println!("  Total features: {}", outcome.stats.total_features);

    Ok(())
}
