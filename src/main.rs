//! city-demographics: merge CSV demographic columns into GeoJSON city features

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
