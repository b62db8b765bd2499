use crate::domain::transaction::TransactionBatch;
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

/// The two request shapes the original invocation harness produces: a bare
/// identifier-to-transaction mapping, or the same mapping wrapped in a
/// `transactions` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequestPayload {
    Envelope { transactions: TransactionBatch },
    Bare(TransactionBatch),
}

/// Reads a reward request, transactions keyed by identifier, from JSON.
pub struct RequestReader<R: Read> {
    source: R,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn transactions(self) -> Result<TransactionBatch> {
        let payload: RequestPayload = serde_json::from_reader(self.source)?;
        Ok(match payload {
            RequestPayload::Envelope { transactions } => transactions,
            RequestPayload::Bare(transactions) => transactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::merchant::CategoryCode;

    const BARE: &str = r#"{
        "T01": {"date": "2021-05-01", "merchant_code": "sportcheck", "amount_cents": 21000},
        "T02": {"date": "2021-05-07", "merchant_code": "subway", "amount_cents": 1853}
    }"#;

    #[test]
    fn test_reads_bare_mapping() {
        let batch = RequestReader::new(BARE.as_bytes()).transactions().unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch["T01"].merchant_code, CategoryCode::from("sportcheck"));
        assert_eq!(batch["T02"].amount_cents, 1853);
    }

    #[test]
    fn test_reads_transactions_envelope() {
        let enveloped = format!(r#"{{"transactions": {BARE}}}"#);
        let batch = RequestReader::new(enveloped.as_bytes()).transactions().unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_rejects_transaction_missing_amount() {
        let data = r#"{"T01": {"date": "2021-05-01", "merchant_code": "sportcheck"}}"#;
        assert!(RequestReader::new(data.as_bytes()).transactions().is_err());
    }
}
