//! Job model.
//!
//! A job is a single unit of work submitted to the batch scheduler:
//! it occupies volume inside a batch and takes a fixed time to process.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// A job to be batched.
///
/// Jobs are immutable value records. The scheduler never mutates them;
/// it only reads the four fields below to sort and pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Space the job occupies inside a batch (same unit as
    /// [`BatchConstraints::max_volume`](super::BatchConstraints)).
    pub volume: f64,
    /// Scheduling priority. Lower value = more urgent.
    pub priority: i32,
    /// Processing (print) time. Batches complete after their slowest job.
    pub duration: f64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, volume: f64, priority: i32, duration: f64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            duration,
        }
    }

    /// Composite sort key: priority first, then duration, both ascending.
    ///
    /// `f64::total_cmp` keeps the key total, so sorting is well-defined
    /// even for pathological duration values.
    pub(crate) fn sort_key(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.duration.total_cmp(&other.duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_job_new() {
        let job = Job::new("M1", 100.0, 1, 120.0);
        assert_eq!(job.id, "M1");
        assert_eq!(job.volume, 100.0);
        assert_eq!(job.priority, 1);
        assert_eq!(job.duration, 120.0);
    }

    #[test]
    fn test_sort_key_priority_dominates() {
        let urgent = Job::new("A", 10.0, 1, 500.0);
        let relaxed = Job::new("B", 10.0, 2, 5.0);
        assert_eq!(urgent.sort_key(&relaxed), Ordering::Less);
    }

    #[test]
    fn test_sort_key_duration_breaks_ties() {
        let short = Job::new("A", 10.0, 1, 90.0);
        let long = Job::new("B", 10.0, 1, 120.0);
        assert_eq!(short.sort_key(&long), Ordering::Less);
        assert_eq!(short.sort_key(&short.clone()), Ordering::Equal);
    }

    #[test]
    fn test_job_serde_record() {
        // Callers supply jobs as plain records; field names are the contract.
        let json = r#"{"id":"M1","volume":100,"priority":1,"duration":120}"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job, Job::new("M1", 100.0, 1, 120.0));
    }
}
