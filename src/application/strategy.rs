//! Period maximization strategies.
//!
//! `exhaustive` is the catalog-agnostic correctness oracle; `greedy` is a
//! fast precedence pass whose table is hand-derived for the reference
//! catalog. Any catalog change requires re-validating `greedy` against
//! `exhaustive` over representative pools before trusting it again.

use crate::domain::merchant::CategoryCode;
use crate::domain::pool::SpendPool;
use crate::domain::rule::{Catalog, RuleId};
use crate::domain::solution::Solution;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::HashMap;

/// How the period maximizer allocates the aggregated pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Backtracking over every rule application order; exponential, the
    /// correctness oracle.
    Exhaustive,
    /// Fixed precedence pass derived for the reference catalog.
    #[default]
    Greedy,
}

/// Explores every way of applying catalog rules to the pool, one application
/// per branch, and returns the highest-scoring allocation.
///
/// A branch ends when no rule but the leftover rule can fire: the remaining
/// balances merge into the catch-all and pay out their floored whole-unit
/// value. Identical sub-pools reuse their already-computed optimum through a
/// cache; every branch is still considered, and ties keep the first
/// candidate found in catalog order, so results are deterministic.
pub fn exhaustive(pool: SpendPool, catalog: &Catalog, catch_all: &CategoryCode) -> Solution {
    let mut cache = HashMap::new();
    best_from(pool, catalog, catch_all, &mut cache)
}

fn best_from(
    pool: SpendPool,
    catalog: &Catalog,
    catch_all: &CategoryCode,
    cache: &mut HashMap<SpendPool, Solution>,
) -> Solution {
    if let Some(known) = cache.get(&pool) {
        return known.clone();
    }

    let solution = if catalog.must_merge(&pool) {
        let mut merged = pool.clone();
        let points = merged.merge_into_catch_all(catch_all);
        Solution::new(points, vec![catalog.leftover_id()])
    } else {
        let mut best: Option<Solution> = None;
        for (id, rule) in catalog.rules() {
            if pool.applicable_count(&rule.requirements) == 0 {
                continue;
            }
            let mut branch = pool.clone();
            branch.apply(&rule.requirements, 1);
            let tail = best_from(branch, catalog, catch_all, cache);
            let points = rule.points + tail.points;
            if best.as_ref().is_none_or(|current| points > current.points) {
                let mut rules_used = Vec::with_capacity(tail.rules_used.len() + 1);
                rules_used.push(id);
                rules_used.extend(tail.rules_used);
                best = Some(Solution::new(points, rules_used));
            }
        }
        // must_merge returned false, so at least one branch was explored.
        best.unwrap_or_else(|| Solution::new(0, Vec::new()))
    };

    cache.insert(pool, solution.clone());
    solution
}

// Reference-catalog positions the greedy table is built around.
const FULL_BUNDLE: RuleId = 1; // 500 pts for 75/25/25
const SMALL_BUNDLE: RuleId = 4; // 150 pts for 25/10/10
const GATE_RULE: RuleId = 6; // 75 pts for 20 of the gating category

/// Fixed precedence pass for the reference catalog.
///
/// Order: the 500-point bundle whenever it fits, then the 150-point bundle
/// when the points it adds beat the gate-rule applications it displaces,
/// then the 20-dollar gate rule, then the catch-all merge. The 300- and
/// 200-point rules and the two-category 75-point rule never enter: per
/// gating-category dollar they are dominated by gate-rule farming on every
/// pool this table is validated against (see the scenario tests, which hold
/// this pass to the exhaustive oracle's totals).
///
/// The table is only meaningful for the reference catalog; callers must
/// re-validate it against `exhaustive` after any catalog change.
pub fn greedy(mut pool: SpendPool, catalog: &Catalog, catch_all: &CategoryCode) -> Solution {
    let mut points = 0u64;
    let mut rules_used = Vec::new();

    loop {
        if catalog.must_merge(&pool) {
            points += pool.merge_into_catch_all(catch_all);
            rules_used.push(catalog.leftover_id());
            break;
        }
        if apply_once(&mut pool, catalog, FULL_BUNDLE, &mut points, &mut rules_used) {
            continue;
        }
        if small_bundle_pays(&pool, catalog)
            && apply_once(&mut pool, catalog, SMALL_BUNDLE, &mut points, &mut rules_used)
        {
            continue;
        }
        if apply_once(&mut pool, catalog, GATE_RULE, &mut points, &mut rules_used) {
            continue;
        }
        // The table does not cover this pool (impossible for the reference
        // catalog, whose gate rule fires whenever must_merge is false).
        // Merging keeps the pass terminating and the payout accounted for.
        points += pool.merge_into_catch_all(catch_all);
        rules_used.push(catalog.leftover_id());
        break;
    }

    Solution::new(points, rules_used)
}

fn apply_once(
    pool: &mut SpendPool,
    catalog: &Catalog,
    id: RuleId,
    points: &mut u64,
    rules_used: &mut Vec<RuleId>,
) -> bool {
    let Some(rule) = catalog.get(id) else {
        return false;
    };
    if pool.applicable_count(&rule.requirements) == 0 {
        return false;
    }
    pool.apply(&rule.requirements, 1);
    *points += rule.points;
    rules_used.push(id);
    true
}

/// Taking the 150-point bundle consumes 25 of the gating category and with
/// it one or two 20-dollar applications, depending on where the balance sits
/// relative to a multiple of 20. The bundle only pays when a single
/// application is displaced.
fn small_bundle_pays(pool: &SpendPool, catalog: &Catalog) -> bool {
    let (Some(small), Some(gate)) = (catalog.get(SMALL_BUNDLE), catalog.get(GATE_RULE)) else {
        return false;
    };
    if pool.applicable_count(&small.requirements) == 0 {
        return false;
    }
    let Some(gate_req) = gate.requirements.first() else {
        return false;
    };
    let Some(small_gate_min) = small
        .requirements
        .iter()
        .find(|req| req.category == gate_req.category)
        .map(|req| req.minimum)
    else {
        return false;
    };

    let balance = pool.balance(&gate_req.category);
    let gate_min = Decimal::from(gate_req.minimum);
    let displaced = ((balance / gate_min).floor()
        - ((balance - Decimal::from(small_gate_min)) / gate_min).floor())
    .to_u64()
    .unwrap_or(u64::MAX);

    small.points > gate.points.saturating_mul(displaced)
}
