use crate::domain::merchant::CategoryCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A raw purchase transaction as supplied by the caller.
///
/// Amounts are integer minor currency units (cents). The date is carried
/// through opaquely and never interpreted by the engine. Records missing the
/// merchant code or the amount are rejected at decode time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTransaction {
    pub merchant_code: CategoryCode,
    pub amount_cents: u64,
    #[serde(default)]
    pub date: Option<String>,
}

impl RawTransaction {
    /// The transaction value in whole-and-fractional dollars.
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.amount_cents) / Decimal::ONE_HUNDRED
    }
}

/// Transactions keyed by their unique identifier.
///
/// A `BTreeMap` keeps iteration deterministic: per-transaction results are
/// reported in ascending identifier order.
pub type TransactionBatch = BTreeMap<String, RawTransaction>;
