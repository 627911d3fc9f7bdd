//! Combinatorial optimization routines for the U-Engine ecosystem.
//!
//! Provides two independent, stateless optimizers:
//!
//! - **`batching`**: a greedy scheduler that packs prioritized jobs into
//!   capacity-bounded batches and reports the flush order plus the total
//!   completion time (sum of per-batch maximum durations).
//! - **`rod_cutting`**: the classic rod-cutting profit maximizer, solved
//!   both by memoized recursion and by bottom-up tabulation. Both solvers
//!   share one recurrence and one tie-breaking rule, so they agree on the
//!   optimum; the tabulated form is the production path for large lengths.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `BatchConstraints`, `BatchSchedule`,
//!   `BatchSummary`, `CutPlan`
//! - **`validation`**: Input integrity checks (constraint bounds, negative
//!   job fields, duplicate IDs, price table length)
//! - **`batching`**: Greedy capacity-bounded batch scheduler
//! - **`rod_cutting`**: Rod-cutting solvers (memoization and tabulation)
//!
//! # Architecture
//!
//! Every entry point is a pure function of its inputs: no I/O, no shared
//! mutable state, no cache that outlives a single call. Calls are
//! independently reentrant and safe to run in parallel without coordination.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1 (Rod Cutting)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod batching;
pub mod models;
pub mod rod_cutting;
pub mod validation;
