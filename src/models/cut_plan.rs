//! Cut plan (rod-cutting solution) model.

use serde::{Deserialize, Serialize};

/// An optimal rod-cutting plan.
///
/// Invariants maintained by both solvers:
/// - `cuts` sums to the input length.
/// - `max_profit` equals the sum of `prices[c - 1]` over the cuts `c`.
///
/// `number_of_cuts` counts the saw strokes, one less than the number of
/// pieces: an uncut rod reports a single piece and zero cuts, and a
/// zero-length rod reports no pieces and zero cuts (not −1).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutPlan {
    /// Maximum achievable profit.
    pub max_profit: f64,
    /// Piece lengths of the optimal cutting, summing to the rod length.
    pub cuts: Vec<usize>,
    /// Number of cuts made: `cuts.len() - 1`, saturating at zero.
    pub number_of_cuts: usize,
}

impl CutPlan {
    /// Creates a plan from a profit and its piece lengths.
    pub fn new(max_profit: f64, cuts: Vec<usize>) -> Self {
        let number_of_cuts = cuts.len().saturating_sub(1);
        Self {
            max_profit,
            cuts,
            number_of_cuts,
        }
    }

    /// Total length covered by the plan (sum of piece lengths).
    pub fn total_length(&self) -> usize {
        self.cuts.iter().sum()
    }

    /// Number of pieces the rod ends up in.
    pub fn piece_count(&self) -> usize {
        self.cuts.len()
    }
}
