//! Solution model
//!
//! A solution is a clean, scalable alternative to fossil-fuel power,
//! described by short bullet points. Solutions are rendered as-is and are
//! not narrowed by the search query.

use serde::{Deserialize, Serialize};

/// A clean-energy alternative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Unique name within the dataset (e.g., "Rooftop & Community Solar")
    pub name: String,

    /// What this alternative delivers, one point per line
    pub bullets: Vec<String>,
}

impl Solution {
    /// Create a solution record
    #[must_use]
    pub fn new(name: &str, bullets: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            bullets: bullets.iter().map(|&b| b.to_owned()).collect(),
        }
    }
}

/// An ordered starter plan for powering a school or small business cleanly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Title of the plan
    pub title: String,

    /// Ordered steps, executed top to bottom
    pub steps: Vec<String>,

    /// What following the plan achieves
    pub outcome: String,
}

impl Blueprint {
    /// Create a blueprint
    #[must_use]
    pub fn new(title: &str, steps: &[&str], outcome: &str) -> Self {
        Self {
            title: title.to_owned(),
            steps: steps.iter().map(|&s| s.to_owned()).collect(),
            outcome: outcome.to_owned(),
        }
    }
}
