//! Batch capacity constraints.

use serde::{Deserialize, Serialize};

/// Capacity limits applied to every batch.
///
/// Both limits must be positive; [`validate_batch_input`](crate::validation::validate_batch_input)
/// rejects anything else before scheduling starts. The limits decide how
/// jobs are grouped — they are never used to reject an individual job, so
/// a single job larger than `max_volume` still gets a batch of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchConstraints {
    /// Maximum cumulative volume per batch.
    pub max_volume: f64,
    /// Maximum number of jobs per batch.
    pub max_items: usize,
}

impl BatchConstraints {
    /// Creates new constraints.
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }
}
