//! Batch schedule (solution) model.
//!
//! A batch schedule is the complete output of one scheduling call: the
//! linear flush order of all jobs, the total completion time, and a
//! summary of each flushed batch for inspection.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

/// A complete batch schedule (solution to one scheduling call).
///
/// Invariants maintained by the scheduler:
/// - `print_order` is a permutation of the input job IDs.
/// - `total_time` is the sum over batches of the batch maximum duration,
///   so it is never below the longest single job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSchedule {
    /// Job IDs in flush order: batch by batch, insertion order within a batch.
    pub print_order: Vec<String>,
    /// Sum of per-batch maximum durations.
    pub total_time: f64,
    /// One summary per flushed batch, in flush order.
    pub batches: Vec<BatchSummary>,
}

/// Summary of one flushed batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Job IDs in insertion order.
    pub job_ids: Vec<String>,
    /// Cumulative volume of the batch.
    pub volume: f64,
    /// Longest duration in the batch; the batch completes after it.
    pub max_duration: f64,
}

impl BatchSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a flushed batch: appends its IDs to the flush order and
    /// its maximum duration to the total time.
    pub(crate) fn push_batch(&mut self, summary: BatchSummary) {
        self.print_order.extend(summary.job_ids.iter().cloned());
        self.total_time += summary.max_duration;
        self.batches.push(summary);
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.print_order.len()
    }

    /// Number of flushed batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Whether the schedule contains no jobs.
    pub fn is_empty(&self) -> bool {
        self.print_order.is_empty()
    }
}
