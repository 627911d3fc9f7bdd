//! Randomized invariant tests for both optimizers.
//!
//! Checks the structural guarantees that must hold for *every* valid
//! input, not just the fixture cases covered by the unit tests:
//! permutation and batch bounds on the scheduling side, solver
//! agreement and the cut-sum/profit-sum identities on the rod side.

use proptest::prelude::*;

use u_combopt::batching::BatchScheduler;
use u_combopt::models::{BatchConstraints, Job};
use u_combopt::rod_cutting::{solve_memo, solve_table};

fn arb_jobs() -> impl Strategy<Value = Vec<Job>> {
    prop::collection::vec((0.0f64..400.0, 0i32..4, 0.0f64..300.0), 0..32).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (volume, priority, duration))| {
                Job::new(format!("J{i}"), volume, priority, duration)
            })
            .collect()
    })
}

fn arb_constraints() -> impl Strategy<Value = BatchConstraints> {
    (1.0f64..600.0, 1usize..6).prop_map(|(max_volume, max_items)| {
        BatchConstraints::new(max_volume, max_items)
    })
}

fn arb_rod() -> impl Strategy<Value = (usize, Vec<f64>)> {
    (1usize..=24).prop_flat_map(|length| {
        prop::collection::vec(0.0f64..50.0, length).prop_map(move |prices| (length, prices))
    })
}

proptest! {
    #[test]
    fn schedule_order_is_permutation_of_input(
        jobs in arb_jobs(),
        constraints in arb_constraints(),
    ) {
        let schedule = BatchScheduler::new().schedule(&jobs, &constraints).unwrap();

        let mut expected: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        let mut actual: Vec<&str> = schedule.print_order.iter().map(String::as_str).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn batches_respect_constraints(
        jobs in arb_jobs(),
        constraints in arb_constraints(),
    ) {
        let schedule = BatchScheduler::new().schedule(&jobs, &constraints).unwrap();

        for batch in &schedule.batches {
            prop_assert!(batch.job_ids.len() <= constraints.max_items);
            // A single oversized job is placed alone; every other batch
            // stays within the volume limit.
            if batch.job_ids.len() > 1 {
                prop_assert!(batch.volume <= constraints.max_volume + 1e-9);
            }
        }
    }

    #[test]
    fn total_time_covers_longest_job(
        jobs in arb_jobs(),
        constraints in arb_constraints(),
    ) {
        let schedule = BatchScheduler::new().schedule(&jobs, &constraints).unwrap();

        let longest = jobs.iter().map(|j| j.duration).fold(0.0, f64::max);
        prop_assert!(schedule.total_time >= longest);

        let batch_sum: f64 = schedule.batches.iter().map(|b| b.max_duration).sum();
        prop_assert_eq!(schedule.total_time, batch_sum);
    }

    #[test]
    fn solvers_agree_on_profit_and_multiset((length, prices) in arb_rod()) {
        let memo = solve_memo(length, &prices).unwrap();
        let table = solve_table(length, &prices).unwrap();

        prop_assert_eq!(memo.max_profit, table.max_profit);

        let mut memo_cuts = memo.cuts.clone();
        let mut table_cuts = table.cuts.clone();
        memo_cuts.sort_unstable();
        table_cuts.sort_unstable();
        prop_assert_eq!(memo_cuts, table_cuts);
    }

    #[test]
    fn cuts_sum_to_length((length, prices) in arb_rod()) {
        let memo = solve_memo(length, &prices).unwrap();
        let table = solve_table(length, &prices).unwrap();

        prop_assert_eq!(memo.total_length(), length);
        prop_assert_eq!(table.total_length(), length);
    }

    #[test]
    fn profit_equals_sum_of_piece_prices((length, prices) in arb_rod()) {
        for plan in [solve_memo(length, &prices).unwrap(), solve_table(length, &prices).unwrap()] {
            let priced: f64 = plan.cuts.iter().map(|&c| prices[c - 1]).sum();
            prop_assert!((plan.max_profit - priced).abs() < 1e-6);
        }
    }
}
