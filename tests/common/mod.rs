use rewards_engine::domain::merchant::CategoryCode;
use rewards_engine::domain::transaction::{RawTransaction, TransactionBatch};

pub fn batch(entries: &[(&str, &str, u64)]) -> TransactionBatch {
    entries
        .iter()
        .map(|(id, merchant, cents)| {
            (
                id.to_string(),
                RawTransaction {
                    merchant_code: CategoryCode::from(*merchant),
                    amount_cents: *cents,
                    date: None,
                },
            )
        })
        .collect()
}

/// The reference month of transactions the engine was sized against:
/// $370.26 sportcheck, $72.38 tim_hortons, $40.06 subway.
pub fn month_sample() -> TransactionBatch {
    batch(&[
        ("T01", "sportcheck", 21000),
        ("T02", "sportcheck", 8700),
        ("T03", "tim_hortons", 323),
        ("T04", "tim_hortons", 1267),
        ("T05", "tim_hortons", 2116),
        ("T06", "tim_hortons", 2211),
        ("T07", "subway", 1853),
        ("T08", "subway", 2153),
        ("T09", "sportcheck", 7326),
        ("T10", "tim_hortons", 1321),
    ])
}
