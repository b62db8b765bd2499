mod common;

use common::{batch, month_sample};
use rewards_engine::application::engine::RewardEngine;
use rewards_engine::application::strategy::Strategy;
use rewards_engine::domain::solution::Solution;
use rewards_engine::domain::transaction::TransactionBatch;

fn month_optimum() -> Solution {
    Solution::new(
        1677,
        vec![1, 4, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 7],
    )
}

#[test]
fn test_month_sample_exhaustive_optimum() {
    let engine = RewardEngine::with_reference_config();
    let solution = engine
        .maximize_for_period(&month_sample(), Strategy::Exhaustive)
        .unwrap();

    // One 500-point bundle (the subway balance only supports one), one
    // 150-point bundle, thirteen 20-dollar applications, then the merge.
    assert_eq!(solution, month_optimum());
}

#[test]
fn test_month_sample_greedy_matches_the_oracle() {
    let engine = RewardEngine::with_reference_config();
    let solution = engine
        .maximize_for_period(&month_sample(), Strategy::Greedy)
        .unwrap();
    assert_eq!(solution, month_optimum());
}

#[test]
fn test_tie_break_pool_prefers_two_small_bundles_over_the_200_point_rule() {
    // $75/$20/$20: one 200-point application loses to two 150-point bundles
    // plus a 20-dollar application.
    let engine = RewardEngine::with_reference_config();
    let batch = batch(&[
        ("T01", "sportcheck", 7500),
        ("T02", "tim_hortons", 2000),
        ("T03", "subway", 2000),
    ]);

    let expected = Solution::new(380, vec![4, 4, 6, 7]);
    let oracle = engine
        .maximize_for_period(&batch, Strategy::Exhaustive)
        .unwrap();
    let fast = engine.maximize_for_period(&batch, Strategy::Greedy).unwrap();

    assert_eq!(oracle, expected);
    assert_eq!(fast, expected);
}

#[test]
fn test_below_gate_pool_merges_in_one_leftover_use() {
    // $19.99 sportcheck cannot reach any non-leftover rule, so the whole
    // pool merges: floor(19.99 + 5.00 + 10.00) = 34 points.
    let engine = RewardEngine::with_reference_config();
    let batch = batch(&[
        ("T01", "sportcheck", 1999),
        ("T02", "tim_hortons", 500),
        ("T03", "subway", 1000),
    ]);

    let expected = Solution::new(34, vec![7]);
    for strategy in [Strategy::Exhaustive, Strategy::Greedy] {
        let solution = engine.maximize_for_period(&batch, strategy).unwrap();
        assert_eq!(solution, expected);
    }
}

#[test]
fn test_greedy_matches_exhaustive_across_fixture_pools() {
    let engine = RewardEngine::with_reference_config();
    let fixtures: Vec<TransactionBatch> = vec![
        month_sample(),
        batch(&[
            ("T01", "sportcheck", 7500),
            ("T02", "tim_hortons", 2000),
            ("T03", "subway", 2000),
        ]),
        batch(&[
            ("T01", "sportcheck", 1999),
            ("T02", "tim_hortons", 500),
            ("T03", "subway", 1000),
        ]),
        // Two full bundles, then two small ones.
        batch(&[
            ("T01", "sportcheck", 20000),
            ("T02", "tim_hortons", 10000),
            ("T03", "subway", 10000),
        ]),
        // One full bundle, then nothing left for bundles but the gate rule.
        batch(&[
            ("T01", "sportcheck", 30000),
            ("T02", "tim_hortons", 2600),
            ("T03", "subway", 2600),
        ]),
        // Catch-all spend from an unrecognized merchant.
        batch(&[("T01", "sportcheck", 5000), ("T02", "the_bay", 3000)]),
        // Fractional remainders on both sides of the gate.
        batch(&[("T01", "sportcheck", 2050), ("T02", "tim_hortons", 999)]),
        TransactionBatch::new(),
    ];

    for fixture in &fixtures {
        let oracle = engine
            .maximize_for_period(fixture, Strategy::Exhaustive)
            .unwrap();
        let fast = engine
            .maximize_for_period(fixture, Strategy::Greedy)
            .unwrap();
        assert_eq!(fast, oracle, "strategies diverged on {fixture:?}");
    }
}

#[test]
fn test_month_sample_per_transaction_rewards() {
    let engine = RewardEngine::with_reference_config();
    let results = engine.maximize_per_transaction(&month_sample());

    assert_eq!(
        results,
        vec![
            Solution::new(400, vec![3, 3]),   // T01 $210.00
            Solution::new(200, vec![3]),      // T02 $87.00
            Solution::new(3, vec![7]),        // T03 $3.23
            Solution::new(12, vec![7]),       // T04 $12.67
            Solution::new(21, vec![7]),       // T05 $21.16
            Solution::new(22, vec![7]),       // T06 $22.11
            Solution::new(18, vec![7]),       // T07 $18.53
            Solution::new(21, vec![7]),       // T08 $21.53
            Solution::new(225, vec![6, 6, 6]), // T09 $73.26
            Solution::new(13, vec![7]),       // T10 $13.21
        ]
    );
}
