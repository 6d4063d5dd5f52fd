use serde::{Deserialize, Serialize};

use crate::normalize::ResampleFilter;

/// Knobs for a comparison run. Metric weights and the similarity threshold
/// are constants and deliberately not part of this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    pub filter: ResampleFilter,
    /// Normalize both images on the blocking pool at the same time.
    pub parallel: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            filter: ResampleFilter::default(),
            parallel: true,
        }
    }
}

impl CompareConfig {
    pub fn new(filter: ResampleFilter, parallel: bool) -> Self {
        Self { filter, parallel }
    }
}
