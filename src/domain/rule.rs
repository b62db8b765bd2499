use crate::domain::merchant::{CategoryCode, Taxonomy};
use crate::domain::pool::SpendPool;
use crate::error::{Result, RewardError};
use serde::{Deserialize, Serialize};

/// 1-based rule identifier, assigned by catalog position. This is the
/// identifier reported back to callers in `rules_used`.
pub type RuleId = usize;

/// One (category, minimum whole dollars) pair a rule demands to fire once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub category: CategoryCode,
    pub minimum: u64,
}

/// A reward rule: a fixed point payout in exchange for consuming the
/// required amounts from the spend pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardRule {
    pub points: u64,
    pub requirements: Vec<Requirement>,
}

impl RewardRule {
    /// Whether this is a leftover rule: a single requirement of one whole
    /// unit of the given catch-all category.
    fn is_leftover(&self, catch_all: &CategoryCode) -> bool {
        matches!(
            self.requirements.as_slice(),
            [Requirement { category, minimum: 1 }] if category == catch_all
        )
    }
}

/// The ordered rule catalog. Immutable once constructed and shared read-only
/// across maximizer invocations.
///
/// Construction validates the leftover invariant: some rule must consume a
/// single whole unit of the catch-all category. Without it the period
/// maximizer could be left with spend no rule can ever consume and would
/// never reach its termination condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    rules: Vec<RewardRule>,
    leftover: RuleId,
}

impl Catalog {
    pub fn new(rules: Vec<RewardRule>, taxonomy: &Taxonomy) -> Result<Self> {
        if rules.is_empty() {
            return Err(RewardError::CatalogError("catalog has no rules".into()));
        }
        for (index, rule) in rules.iter().enumerate() {
            let id = index + 1;
            if rule.points == 0 {
                return Err(RewardError::CatalogError(format!(
                    "rule {id} has a zero point value"
                )));
            }
            if rule.requirements.is_empty() {
                return Err(RewardError::CatalogError(format!(
                    "rule {id} has no requirements"
                )));
            }
            for req in &rule.requirements {
                if req.minimum == 0 {
                    return Err(RewardError::CatalogError(format!(
                        "rule {id} requires a zero amount of '{}'",
                        req.category
                    )));
                }
                if !taxonomy.recognizes(&req.category) {
                    return Err(RewardError::CatalogError(format!(
                        "rule {id} references unrecognized category '{}'",
                        req.category
                    )));
                }
            }
        }

        let leftover = rules
            .iter()
            .position(|rule| rule.is_leftover(taxonomy.catch_all()))
            .map(|index| index + 1)
            .ok_or_else(|| {
                RewardError::CatalogError(format!(
                    "no leftover rule consuming one whole unit of '{}'",
                    taxonomy.catch_all()
                ))
            })?;

        Ok(Self { rules, leftover })
    }

    /// The default catalog: the seven reference rules, from the 500-point
    /// three-category bundle down to the 1-point-per-dollar leftover rule.
    pub fn reference() -> Self {
        let requirement = |category: &str, minimum: u64| Requirement {
            category: CategoryCode::from(category),
            minimum,
        };
        let rules = vec![
            RewardRule {
                points: 500,
                requirements: vec![
                    requirement("sportcheck", 75),
                    requirement("tim_hortons", 25),
                    requirement("subway", 25),
                ],
            },
            RewardRule {
                points: 300,
                requirements: vec![requirement("sportcheck", 75), requirement("tim_hortons", 25)],
            },
            RewardRule {
                points: 200,
                requirements: vec![requirement("sportcheck", 75)],
            },
            RewardRule {
                points: 150,
                requirements: vec![
                    requirement("sportcheck", 25),
                    requirement("tim_hortons", 10),
                    requirement("subway", 10),
                ],
            },
            RewardRule {
                points: 75,
                requirements: vec![requirement("sportcheck", 25), requirement("tim_hortons", 10)],
            },
            RewardRule {
                points: 75,
                requirements: vec![requirement("sportcheck", 20)],
            },
            RewardRule {
                points: 1,
                requirements: vec![requirement("other", 1)],
            },
        ];
        Self { rules, leftover: 7 }
    }

    /// Rules in catalog order, paired with their 1-based identifier.
    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &RewardRule)> {
        self.rules.iter().enumerate().map(|(index, rule)| (index + 1, rule))
    }

    pub fn get(&self, id: RuleId) -> Option<&RewardRule> {
        id.checked_sub(1).and_then(|index| self.rules.get(index))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn leftover_id(&self) -> RuleId {
        self.leftover
    }

    /// True exactly when no rule other than the leftover rule can fire from
    /// the current pool state. Balances only ever decrease, so once this
    /// holds the remaining spend belongs to the catch-all merge.
    pub fn must_merge(&self, pool: &SpendPool) -> bool {
        self.rules()
            .filter(|(id, _)| *id != self.leftover)
            .all(|(_, rule)| pool.applicable_count(&rule.requirements) == 0)
    }
}
