use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Result of one dispatched command, as written to the output CSV.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CommandOutcome {
    pub session: String,
    pub op: String,
    /// Session data as JSON, a status, or `ok` for void operations.
    pub outcome: String,
}

pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, outcome: &CommandOutcome) -> Result<()> {
        self.writer.serialize(outcome)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
