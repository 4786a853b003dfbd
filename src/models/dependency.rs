//! Dependency model
//!
//! A dependency describes one fossil-fuel power source that cities commonly
//! run on: why it is common, what is wrong with it, and where it powers real
//! cities today. Identity is by `name`; the dataset's insertion order is the
//! default display order.

use serde::{Deserialize, Serialize};

/// A fossil-fuel power source cities depend on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Unique name within the dataset (e.g., "Coal-fired Power")
    pub name: String,

    /// Why this dependency is common
    pub rationale: String,

    /// Short issue tags (e.g., "High CO₂", "Noise")
    pub issues: Vec<String>,

    /// Example deployment locations (e.g., "Lagos (Nigeria)")
    pub examples: Vec<String>,
}

impl Dependency {
    /// Create a dependency record
    #[must_use]
    pub fn new(name: &str, rationale: &str, issues: &[&str], examples: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            rationale: rationale.to_owned(),
            issues: issues.iter().map(|&i| i.to_owned()).collect(),
            examples: examples.iter().map(|&e| e.to_owned()).collect(),
        }
    }

    /// Derived copy of this record with `examples` narrowed to the given
    /// subsequence. The source record is never mutated.
    #[must_use]
    pub fn with_examples(&self, examples: Vec<String>) -> Self {
        Self {
            name: self.name.clone(),
            rationale: self.rationale.clone(),
            issues: self.issues.clone(),
            examples,
        }
    }
}
