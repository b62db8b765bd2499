use crate::application::strategy::{self, Strategy};
use crate::domain::merchant::Taxonomy;
use crate::domain::pool::SpendPool;
use crate::domain::rule::Catalog;
use crate::domain::solution::Solution;
use crate::domain::transaction::{RawTransaction, TransactionBatch};
use crate::error::{Result, RewardError};

/// The reward maximization engine.
///
/// Owns the configuration it was built with (a merchant taxonomy and a rule
/// catalog) and exposes the two maximizers over it. There is no
/// process-wide default state: callers pass configuration explicitly, with
/// `with_reference_config` supplying the named defaults.
pub struct RewardEngine {
    taxonomy: Taxonomy,
    catalog: Catalog,
}

impl RewardEngine {
    pub fn new(taxonomy: Taxonomy, catalog: Catalog) -> Self {
        Self { taxonomy, catalog }
    }

    pub fn with_reference_config() -> Self {
        Self::new(Taxonomy::reference(), Catalog::reference())
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scores every transaction in isolation, in ascending identifier order.
    ///
    /// Policy: the first rule in catalog order with a nonzero applicable
    /// count wins and is applied as many times as the amount allows; later
    /// rules are never considered, even when repeating one of them would pay
    /// more. A transaction no rule can reach merges into the catch-all for
    /// the floored leftover payout.
    pub fn maximize_per_transaction(&self, batch: &TransactionBatch) -> Vec<Solution> {
        batch.values().map(|tx| self.score_transaction(tx)).collect()
    }

    fn score_transaction(&self, tx: &RawTransaction) -> Solution {
        let mut pool = SpendPool::singleton(
            tx.merchant_code.clone(),
            tx.amount(),
            self.taxonomy.catch_all().clone(),
        );

        if self.catalog.must_merge(&pool) {
            let points = pool.merge_into_catch_all(self.taxonomy.catch_all());
            return Solution::new(points, vec![self.catalog.leftover_id()]);
        }
        for (id, rule) in self.catalog.rules() {
            let times = pool.applicable_count(&rule.requirements);
            if times > 0 {
                return Solution::new(rule.points * times, vec![id; times as usize]);
            }
        }
        // must_merge was false, so the scan above found a rule.
        Solution::new(0, Vec::new())
    }

    /// Maximizes points over the period's aggregated spend pool.
    ///
    /// The greedy strategy is rejected for any catalog other than the
    /// reference one: its precedence table is derived from that catalog and
    /// has only been validated against the exhaustive solver there.
    pub fn maximize_for_period(
        &self,
        batch: &TransactionBatch,
        strategy: Strategy,
    ) -> Result<Solution> {
        let (pool, _grand_total) = SpendPool::aggregate(batch, &self.taxonomy);
        let catch_all = self.taxonomy.catch_all();
        match strategy {
            Strategy::Exhaustive => Ok(strategy::exhaustive(pool, &self.catalog, catch_all)),
            Strategy::Greedy => {
                if self.catalog != Catalog::reference() {
                    return Err(RewardError::StrategyError(
                        "the greedy strategy is only validated for the reference catalog; \
                         use the exhaustive strategy with a substituted catalog"
                            .into(),
                    ));
                }
                Ok(strategy::greedy(pool, &self.catalog, catch_all))
            }
        }
    }
}
