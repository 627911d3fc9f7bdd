//! Bottom-up tabulated rod-cutting solver.
//!
//! # Algorithm
//!
//! Fills `profit[0..=length]` in increasing length order. For each
//! length `i`, scans first-cut candidates `j` in 1..=i and records the
//! winning `j` in a parallel choice table. The plan is reconstructed by
//! walking the choice table from the full length down to zero.
//!
//! # Complexity
//! O(length²) time, O(length) space beyond the price table. This is the
//! production path: unlike the memoized form it needs no recursion, so
//! large lengths pose no stack-depth risk.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1
//! (EXTENDED-BOTTOM-UP-CUT-ROD)

use crate::models::CutPlan;
use crate::validation::{validate_rod_input, ValidationError};

/// Computes the maximum rod-cutting profit by bottom-up tabulation.
///
/// Agrees with [`solve_memo`](super::solve_memo) on the profit and on
/// the multiset of piece lengths (both use the same smallest-cut-wins
/// tie rule); the pieces are reported from the first cut onward, which
/// reverses the memoized solver's order.
///
/// # Errors
/// Rejects a price table with fewer than `length` entries.
pub fn solve_table(length: usize, prices: &[f64]) -> Result<CutPlan, Vec<ValidationError>> {
    validate_rod_input(length, prices)?;

    let mut profit = vec![0.0_f64; length + 1];
    // first_cut[i] = piece taken first at remaining length i (1..=i).
    let mut first_cut = vec![0_usize; length + 1];

    for i in 1..=length {
        let mut best = f64::NEG_INFINITY;
        for j in 1..=i {
            let candidate = prices[j - 1] + profit[i - j];
            // Strict improvement only: the smallest j wins ties.
            if candidate > best {
                best = candidate;
                first_cut[i] = j;
            }
        }
        profit[i] = best;
    }

    let mut cuts = Vec::new();
    let mut remaining = length;
    while remaining > 0 {
        let piece = first_cut[remaining];
        cuts.push(piece);
        remaining -= piece;
    }

    Ok(CutPlan::new(profit[length], cuts))
}
