//! Greedy priority-driven batch scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort jobs by (priority ascending, duration ascending).
//! 2. Walk the sorted sequence, accumulating jobs into the open batch
//!    while both capacity limits hold.
//! 3. On the first job that does not fit, flush the open batch and seed
//!    a new one with that job.
//! 4. Flush the trailing batch.
//!
//! A batch completes after its slowest job, so the schedule's total time
//! is the sum of per-batch maximum durations.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the packing walk.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use crate::models::{BatchConstraints, BatchSchedule, BatchSummary, Job};
use crate::validation::{validate_batch_input, ValidationError};

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    /// Jobs to schedule.
    pub jobs: Vec<Job>,
    /// Capacity limits for every batch.
    pub constraints: BatchConstraints,
}

impl BatchRequest {
    /// Creates a new batch request.
    pub fn new(jobs: Vec<Job>, constraints: BatchConstraints) -> Self {
        Self { jobs, constraints }
    }
}

/// Greedy priority-driven batch scheduler.
///
/// Packs jobs into capacity-bounded batches in priority order. The
/// scheduler is stateless — every call is a pure function of its inputs.
///
/// # Example
///
/// ```
/// use u_combopt::batching::BatchScheduler;
/// use u_combopt::models::{BatchConstraints, Job};
///
/// let jobs = vec![
///     Job::new("M1", 100.0, 1, 120.0),
///     Job::new("M2", 150.0, 1, 90.0),
/// ];
/// let constraints = BatchConstraints::new(300.0, 2);
///
/// let schedule = BatchScheduler::new().schedule(&jobs, &constraints).unwrap();
/// assert_eq!(schedule.print_order, vec!["M2", "M1"]);
/// assert_eq!(schedule.total_time, 120.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchScheduler;

impl BatchScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Schedules jobs into capacity-bounded batches.
    ///
    /// # Algorithm
    /// 1. Validate constraints and jobs; fail fast on any problem.
    /// 2. Stable-sort by (priority ascending, duration ascending).
    /// 3. Greedily pack the sorted jobs, flushing whenever the next job
    ///    would exceed `max_volume` or `max_items`.
    ///
    /// A job whose own volume exceeds `max_volume` is still scheduled:
    /// it ends up alone in its own batch. Constraints decide grouping,
    /// never admission.
    ///
    /// # Errors
    /// Returns every [`ValidationError`] found in the input; no partial
    /// schedule is produced.
    pub fn schedule(
        &self,
        jobs: &[Job],
        constraints: &BatchConstraints,
    ) -> Result<BatchSchedule, Vec<ValidationError>> {
        validate_batch_input(jobs, constraints)?;

        let mut sorted: Vec<&Job> = jobs.iter().collect();
        sorted.sort_by(|a, b| a.sort_key(b));

        let mut schedule = BatchSchedule::new();
        let mut batch: Vec<&Job> = Vec::new();
        let mut batch_volume = 0.0;

        for &job in &sorted {
            let fits = batch_volume + job.volume <= constraints.max_volume
                && batch.len() < constraints.max_items;
            if fits {
                batch.push(job);
                batch_volume += job.volume;
            } else {
                if !batch.is_empty() {
                    schedule.push_batch(summarize(&batch, batch_volume));
                }
                batch = vec![job];
                batch_volume = job.volume;
            }
        }

        if !batch.is_empty() {
            schedule.push_batch(summarize(&batch, batch_volume));
        }

        Ok(schedule)
    }

    /// Schedules from a request.
    pub fn schedule_request(
        &self,
        request: &BatchRequest,
    ) -> Result<BatchSchedule, Vec<ValidationError>> {
        self.schedule(&request.jobs, &request.constraints)
    }
}

fn summarize(batch: &[&Job], volume: f64) -> BatchSummary {
    let max_duration = batch.iter().map(|j| j.duration).fold(0.0, f64::max);
    BatchSummary {
        job_ids: batch.iter().map(|j| j.id.clone()).collect(),
        volume,
        max_duration,
    }
}
