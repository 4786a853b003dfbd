//! Summarize the problem and the datasets

use gridfacts::dataset;
use gridfacts::output::{OutputMode, OverviewResult};

/// Render the overview: title, problem statement, dataset counts
pub fn overview(mode: OutputMode) -> anyhow::Result<()> {
    let result = OverviewResult {
        title: dataset::TITLE.to_owned(),
        problem: dataset::PROBLEM.to_owned(),
        dependencies: dataset::dependencies().len(),
        solutions: dataset::solutions().len(),
        impacts: dataset::impacts().len(),
    };
    result.render(mode);
    Ok(())
}
