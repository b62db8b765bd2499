use crate::domain::merchant::CategoryCode;
use crate::domain::transaction::{RawTransaction, TransactionBatch};
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct Row {
    id: String,
    merchant_code: String,
    amount_cents: u64,
    #[serde(default)]
    date: Option<String>,
}

/// Reads a transaction batch from a CSV source with columns
/// `id,merchant_code,amount_cents,date`.
///
/// This reader wraps `csv::Reader` and handles whitespace trimming and
/// flexible record lengths automatically. Rows missing the merchant code or
/// the amount fail the read, per the input contract.
pub struct TransactionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TransactionReader<R> {
    /// Creates a new `TransactionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Reads and deserializes the full batch, keyed by transaction
    /// identifier. A repeated identifier keeps the last row, matching map
    /// semantics on the JSON path.
    pub fn transactions(self) -> Result<TransactionBatch> {
        let mut batch = TransactionBatch::new();
        for row in self.reader.into_deserialize::<Row>() {
            let row = row?;
            batch.insert(
                row.id,
                RawTransaction {
                    merchant_code: CategoryCode::new(row.merchant_code),
                    amount_cents: row.amount_cents,
                    date: row.date,
                },
            );
        }
        Ok(batch)
    }
}
