//! Rod-cutting profit maximization.
//!
//! Given a rod of integer length `L` and a price table whose entry
//! `i - 1` is the price of an uncut piece of length `i`, both solvers
//! find a cutting that maximizes total sale price:
//!
//! - [`solve_memo`]: top-down memoized recursion. Kept for
//!   cross-validation; recursion depth grows with the rod length.
//! - [`solve_table`]: bottom-up tabulation, O(L²) time and O(L) extra
//!   space. The production path — no recursion, same recurrence.
//!
//! Both scan candidate cut sizes ascending and update on strict
//! improvement only, so the smallest cut wins ties at every sub-length.
//! The two solvers therefore agree on the profit *and* on the multiset
//! of piece lengths; only the order of the pieces may differ (the
//! memoized solver appends outer cuts last, the tabulated solver
//! reconstructs from the full length downward).
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1

mod memo;
mod table;

pub use memo::solve_memo;
pub use table::solve_table;
