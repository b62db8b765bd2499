use crate::domain::merchant::{CategoryCode, Taxonomy};
use crate::domain::rule::Requirement;
use crate::domain::transaction::TransactionBatch;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;

/// Per-category dollar balances that reward rules draw from.
///
/// A pool is scratch state owned by a single maximizer invocation. Rules
/// deduct from it in place, so balances only ever decrease; the sum of all
/// balances starts at the grand total and shrinks with every application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpendPool {
    balances: BTreeMap<CategoryCode, Decimal>,
}

impl SpendPool {
    /// Folds a batch of raw transactions into per-category totals.
    ///
    /// Every recognized category is present in the result, unrecognized
    /// merchants accumulate under the catch-all. Returns the pool together
    /// with the grand total across all transactions.
    pub fn aggregate(batch: &TransactionBatch, taxonomy: &Taxonomy) -> (Self, Decimal) {
        let mut balances: BTreeMap<CategoryCode, Decimal> = taxonomy
            .recognized()
            .map(|code| (code.clone(), Decimal::ZERO))
            .collect();
        let mut grand_total = Decimal::ZERO;

        for tx in batch.values() {
            let category = taxonomy.normalize(&tx.merchant_code);
            let amount = tx.amount();
            grand_total += amount;
            *balances.entry(category).or_insert(Decimal::ZERO) += amount;
        }

        (Self { balances }, grand_total)
    }

    /// A scratch pool for scoring one transaction in isolation: the
    /// transaction's own category plus a zero catch-all entry.
    pub fn singleton(category: CategoryCode, amount: Decimal, catch_all: CategoryCode) -> Self {
        let mut balances = BTreeMap::new();
        balances.insert(catch_all, Decimal::ZERO);
        balances.insert(category, amount);
        Self { balances }
    }

    pub fn balance(&self, category: &CategoryCode) -> Decimal {
        self.balances.get(category).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn total(&self) -> Decimal {
        self.balances.values().sum()
    }

    /// How many whole times a requirement vector can be satisfied.
    ///
    /// Each (category, minimum) pair independently allows
    /// `floor(balance / minimum)` applications; the vector as a whole is
    /// bounded by its scarcest pair. A category that is absent or below its
    /// minimum makes the rule wholly inapplicable.
    pub fn applicable_count(&self, requirements: &[Requirement]) -> u64 {
        requirements
            .iter()
            .map(|req| {
                let minimum = Decimal::from(req.minimum);
                match self.balances.get(&req.category) {
                    Some(balance) if *balance >= minimum => {
                        (balance / minimum).floor().to_u64().unwrap_or(0)
                    }
                    _ => 0,
                }
            })
            .min()
            .unwrap_or(0)
    }

    /// Deducts `minimum * times` for every requirement pair, in place.
    ///
    /// Returns the total amount deducted. The caller must have established
    /// `applicable_count(requirements) >= times`; over-applying would drive a
    /// balance negative, so the precondition is asserted.
    pub fn apply(&mut self, requirements: &[Requirement], times: u64) -> Decimal {
        assert!(
            self.applicable_count(requirements) >= times,
            "rule applied more times than the pool allows"
        );
        if times == 0 {
            return Decimal::ZERO;
        }

        let mut deducted = Decimal::ZERO;
        for req in requirements {
            let portion = Decimal::from(req.minimum * times);
            if let Some(balance) = self.balances.get_mut(&req.category) {
                *balance -= portion;
                deducted += portion;
            }
        }
        deducted
    }

    /// Moves every remaining balance into the catch-all category and returns
    /// the floored whole-unit payout; fractional cents below one unit are
    /// forfeited. Calling this on an already-merged pool is a no-op read.
    pub fn merge_into_catch_all(&mut self, catch_all: &CategoryCode) -> u64 {
        let mut moved = Decimal::ZERO;
        for (category, balance) in self.balances.iter_mut() {
            if category != catch_all {
                moved += std::mem::replace(balance, Decimal::ZERO);
            }
        }
        let merged = self.balances.entry(catch_all.clone()).or_insert(Decimal::ZERO);
        *merged += moved;
        merged.floor().to_u64().unwrap_or(0)
    }
}
