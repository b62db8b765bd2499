use crate::domain::solution::Solution;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Response<'a> {
    per_transaction: &'a [Solution],
    month: &'a Solution,
}

/// Encodes maximizer output as the JSON response payload: one entry per
/// input transaction, in input order, plus the period result.
pub struct ResponseWriter<W: Write> {
    target: W,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(target: W) -> Self {
        Self { target }
    }

    pub fn write(&mut self, per_transaction: &[Solution], month: &Solution) -> Result<()> {
        serde_json::to_writer_pretty(
            &mut self.target,
            &Response {
                per_transaction,
                month,
            },
        )?;
        writeln!(self.target)?;
        Ok(())
    }
}
