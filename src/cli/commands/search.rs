//! Filter the dependency list by a city or keyword

use gridfacts::dataset;
use gridfacts::filter::filter_dependencies;
use gridfacts::output::{OutputMode, SearchResult};

/// Filter the dependency dataset by a free-text query and render the matches.
/// An empty match set is a valid outcome, not an error.
pub fn search(query: &str, mode: OutputMode) -> anyhow::Result<()> {
    let dependencies = filter_dependencies(query, dataset::dependencies());

    let result = SearchResult {
        query: query.to_owned(),
        matched: dependencies.len(),
        dependencies,
    };
    result.render(mode);
    Ok(())
}
