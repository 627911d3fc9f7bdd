//! Input validation for both optimizers.
//!
//! Checks structural integrity of scheduling and rod-cutting inputs
//! before any computation starts. Detects:
//! - Non-positive batch capacity limits
//! - Negative job volumes or durations
//! - Duplicate job IDs
//! - Price tables shorter than the rod length
//!
//! All problems found are reported together; nothing is computed and no
//! partial result is produced when validation fails.

use crate::models::{BatchConstraints, Job};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A call-level parameter is unusable: non-positive capacity limit,
    /// or a price table shorter than the rod length.
    MalformedInput,
    /// A job carries a negative volume or duration.
    InvalidJob,
    /// Two jobs share the same ID.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of one batch-scheduling call.
///
/// Checks:
/// 1. `max_volume` is positive and finite
/// 2. `max_items` is at least 1
/// 3. No job has a negative volume or duration
/// 4. No duplicate job IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch_input(jobs: &[Job], constraints: &BatchConstraints) -> ValidationResult {
    let mut errors = Vec::new();

    if constraints.max_volume <= 0.0 || !constraints.max_volume.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MalformedInput,
            format!(
                "max_volume must be positive, got {}",
                constraints.max_volume
            ),
        ));
    }
    if constraints.max_items == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::MalformedInput,
            "max_items must be at least 1",
        ));
    }

    let mut seen_ids = std::collections::HashSet::new();
    for job in jobs {
        if !seen_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
        if job.volume < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidJob,
                format!("Job '{}' has negative volume {}", job.id, job.volume),
            ));
        }
        if job.duration < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidJob,
                format!("Job '{}' has negative duration {}", job.id, job.duration),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the input of one rod-cutting call.
///
/// The price table must carry one entry per unit length: entry `i - 1`
/// is the price of an uncut piece of length `i`. A shorter table would
/// be read out of bounds at the full length, so it is rejected here.
pub fn validate_rod_input(length: usize, prices: &[f64]) -> ValidationResult {
    if prices.len() < length {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::MalformedInput,
            format!(
                "Price table has {} entries but rod length is {}",
                prices.len(),
                length
            ),
        )]);
    }
    Ok(())
}
