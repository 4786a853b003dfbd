//! Impact model

use serde::{Deserialize, Serialize};

/// A consequence of power cuts and fossil-fuel dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impact {
    /// Short title (e.g., "Economic Loss")
    pub title: String,

    /// One-sentence detail
    pub detail: String,
}

impl Impact {
    /// Create an impact record
    #[must_use]
    pub fn new(title: &str, detail: &str) -> Self {
        Self {
            title: title.to_owned(),
            detail: detail.to_owned(),
        }
    }
}
