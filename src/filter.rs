//! The search filter
//!
//! Narrows the dependency dataset to the records relevant to a free-text
//! query. Matching is case-insensitive substring containment over name,
//! rationale, issue tags, and example locations; a record's `examples` are
//! narrowed to the matching entries. Pure: the source dataset is never
//! mutated and dataset order is preserved.

use crate::models::Dependency;

/// Filter the dependency dataset by a free-text query.
///
/// The query is trimmed first; an empty or whitespace-only query returns the
/// full dataset unchanged. Otherwise each record's `examples` are narrowed to
/// the entries containing the lowercased query, and the record is kept when
/// its name, rationale, or any issue tag contains the query, or when any
/// example survived the narrowing. Total over all string inputs; there is no
/// error path and "no results" is an empty, valid output.
#[must_use]
pub fn filter_dependencies(query: &str, dataset: &[Dependency]) -> Vec<Dependency> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return dataset.to_vec();
    }

    let q = trimmed.to_lowercase();
    dataset
        .iter()
        .filter_map(|dep| {
            let examples: Vec<String> = dep
                .examples
                .iter()
                .filter(|e| e.to_lowercase().contains(&q))
                .cloned()
                .collect();

            let keep = dep.name.to_lowercase().contains(&q)
                || dep.rationale.to_lowercase().contains(&q)
                || dep.issues.iter().any(|i| i.to_lowercase().contains(&q))
                || !examples.is_empty();

            keep.then(|| dep.with_examples(examples))
        })
        .collect()
}

/// A filter that remembers the last (query, result) pair
///
/// For embedders that re-filter on every keystroke: the result is recomputed
/// only when the query changes. Results are identical to calling
/// [`filter_dependencies`] directly.
#[derive(Debug)]
pub struct CachedFilter<'a> {
    dataset: &'a [Dependency],
    last: Option<(String, Vec<Dependency>)>,
}

impl<'a> CachedFilter<'a> {
    /// Create a cached filter over a dataset
    #[must_use]
    pub const fn new(dataset: &'a [Dependency]) -> Self {
        Self {
            dataset,
            last: None,
        }
    }

    /// The filtered view for `query`, recomputing only on query change
    pub fn results(&mut self, query: &str) -> &[Dependency] {
        let stale = self.last.as_ref().is_none_or(|(q, _)| q != query);
        if stale {
            let result = filter_dependencies(query, self.dataset);
            self.last = Some((query.to_owned(), result));
        }
        self.last.as_ref().map_or(&[], |(_, r)| r)
    }
}
