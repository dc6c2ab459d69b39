//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for [`crate::search::SearchEngine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Worker count for the parallel strategy.
    ///
    /// `0` uses rayon's global pool (sized to available parallelism);
    /// any other value builds a dedicated pool of exactly that many
    /// threads for the engine.
    pub parallel_workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { parallel_workers: 0 }
    }
}

impl SearchConfig {
    /// Config pinned to a fixed worker count.
    pub fn with_workers(parallel_workers: usize) -> Self {
        Self { parallel_workers }
    }
}
