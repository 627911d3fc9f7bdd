//! Optimization domain models.
//!
//! Provides the core data types for the two optimizers: jobs and
//! constraints on the batching side, cut plans on the rod-cutting side.
//! All types are plain value records — immutable once constructed and
//! alive only for the duration of one call.
//!
//! # Domain Mappings
//!
//! | u-combopt | 3D Printing | Manufacturing | Logistics |
//! |-----------|-------------|---------------|-----------|
//! | Job | Print Model | Order | Parcel |
//! | BatchConstraints | Printer Limits | Machine Capacity | Vehicle Capacity |
//! | BatchSchedule | Print Queue | Production Run Plan | Load Plan |
//! | CutPlan | — | Stock Cutting Plan | — |

mod constraints;
mod cut_plan;
mod job;
mod schedule;

pub use constraints::BatchConstraints;
pub use cut_plan::CutPlan;
pub use job::Job;
pub use schedule::{BatchSchedule, BatchSummary};
