//! Verify command implementation

use anyhow::{Context, Result};
use std::path::Path;

use city_demographics::config::OUTPUT_PATH;
use city_demographics::render::render_verify_summary;
use city_demographics::verify::verify_file;

pub fn run() -> Result<()> {
    let path = Path::new(OUTPUT_PATH);
    let summary =
        verify_file(path).with_context(|| format!("Failed to verify {}", path.display()))?;

    print!("{}", render_verify_summary(&summary));
    Ok(())
}
