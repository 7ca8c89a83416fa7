use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Authorize,
    Status,
    Capture,
    Refund,
    Cancel,
    Delete,
    Retrieve,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Authorize => "authorize",
            Self::Status => "status",
            Self::Capture => "capture",
            Self::Refund => "refund",
            Self::Cancel => "cancel",
            Self::Delete => "delete",
            Self::Retrieve => "retrieve",
        };
        f.write_str(name)
    }
}

/// One row of a command file: `op, provider, session, amount, currency`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct SessionCommand {
    pub op: Operation,
    pub provider: String,
    /// Caller-chosen label used to look the session data up between rows.
    pub session: String,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
}

/// Reads session commands from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and tolerating short rows so the
/// trailing `amount`/`currency` columns can be left out.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes commands, one `Result` per row.
    pub fn commands(self) -> impl Iterator<Item = Result<SessionCommand>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
