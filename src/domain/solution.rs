use crate::domain::rule::RuleId;
use serde::Serialize;

/// The outcome of a maximizer run: total points awarded plus the rules that
/// produced them, identified by catalog position, in application order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub points: u64,
    pub rules_used: Vec<RuleId>,
}

impl Solution {
    pub fn new(points: u64, rules_used: Vec<RuleId>) -> Self {
        Self { points, rules_used }
    }
}
