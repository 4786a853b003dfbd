//! Show the starter blueprint

use gridfacts::dataset;
use gridfacts::output::{BlueprintResult, OutputMode};

/// Render the starter blueprint for a school or small business
pub fn blueprint(mode: OutputMode) -> anyhow::Result<()> {
    let result = BlueprintResult {
        blueprint: dataset::blueprint().clone(),
    };
    result.render(mode);
    Ok(())
}
