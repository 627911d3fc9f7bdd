//! Greedy capacity-bounded batch scheduling.
//!
//! `BatchScheduler` sorts jobs by priority and duration, then packs them
//! into batches bounded by cumulative volume and item count. Batches are
//! contiguous runs of the sorted sequence: once a job no longer fits, the
//! open batch is flushed and a new one starts — no job is ever moved
//! across a batch boundary after assignment, and no job is ever rejected.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Brucker (2007), "Scheduling Algorithms", Ch. 2

mod greedy;

pub use greedy::{BatchRequest, BatchScheduler};
