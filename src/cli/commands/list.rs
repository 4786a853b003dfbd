//! List the fossil-fuel dependencies

use gridfacts::dataset;
use gridfacts::output::{DependencyListResult, OutputMode};

/// Render the full dependency dataset, unfiltered, in display order
pub fn list(mode: OutputMode) -> anyhow::Result<()> {
    let dependencies = dataset::dependencies().to_vec();

    let result = DependencyListResult {
        total: dependencies.len(),
        dependencies,
    };
    result.render(mode);
    Ok(())
}
