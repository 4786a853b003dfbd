//! List the clean alternatives

use gridfacts::dataset;
use gridfacts::output::{OutputMode, SolutionListResult};

/// Render the solution dataset. Solutions are never narrowed by a query.
pub fn solutions(mode: OutputMode) -> anyhow::Result<()> {
    let result = SolutionListResult {
        solutions: dataset::solutions().to_vec(),
    };
    result.render(mode);
    Ok(())
}
