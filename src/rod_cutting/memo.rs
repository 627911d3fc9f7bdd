//! Top-down memoized rod-cutting solver.
//!
//! # Algorithm
//!
//! profit(0) = 0 with no pieces. For n > 0:
//!
//! ```text
//! profit(n) = max over i in 1..=n of prices[i - 1] + profit(n - i)
//! ```
//!
//! Sub-results are cached in a dense vector indexed by remaining length,
//! so each distinct sub-length is solved once per call. The cache is
//! local to the call and dropped with it — nothing is shared across
//! invocations.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1

use crate::models::CutPlan;
use crate::validation::{validate_rod_input, ValidationError};

/// Cached sub-solution: best profit and piece lengths for one remaining length.
type SubSolution = (f64, Vec<usize>);

/// Computes the maximum rod-cutting profit by memoized recursion.
///
/// Piece lengths are appended as the recursion unwinds, so inner
/// (smallest-residual) decisions come first in the returned plan.
///
/// # Errors
/// Rejects a price table with fewer than `length` entries.
pub fn solve_memo(length: usize, prices: &[f64]) -> Result<CutPlan, Vec<ValidationError>> {
    validate_rod_input(length, prices)?;

    let mut memo: Vec<Option<SubSolution>> = vec![None; length + 1];
    let (max_profit, cuts) = best_cut(length, prices, &mut memo);
    Ok(CutPlan::new(max_profit, cuts))
}

fn best_cut(n: usize, prices: &[f64], memo: &mut [Option<SubSolution>]) -> SubSolution {
    if n == 0 {
        return (0.0, Vec::new());
    }
    if let Some(cached) = &memo[n] {
        return cached.clone();
    }

    let mut max_profit = f64::NEG_INFINITY;
    let mut best_cuts = Vec::new();

    for i in 1..=n {
        let (sub_profit, sub_cuts) = best_cut(n - i, prices, memo);
        let profit = prices[i - 1] + sub_profit;
        // Strict improvement only: the smallest i wins ties.
        if profit > max_profit {
            max_profit = profit;
            best_cuts = sub_cuts;
            best_cuts.push(i);
        }
    }

    memo[n] = Some((max_profit, best_cuts.clone()));
    (max_profit, best_cuts)
}
