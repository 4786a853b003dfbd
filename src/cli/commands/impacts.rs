//! List what power cuts cost

use gridfacts::dataset;
use gridfacts::output::{ImpactListResult, OutputMode};

/// Render the impact dataset
pub fn impacts(mode: OutputMode) -> anyhow::Result<()> {
    let result = ImpactListResult {
        impacts: dataset::impacts().to_vec(),
    };
    result.render(mode);
    Ok(())
}
