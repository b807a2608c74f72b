use crate::domain::request::BillRequest;
use crate::error::{BillingError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Submit,
    Process,
    Undo,
    Export,
}

/// Raw CSV row with columns `action,id,type,amount,urgent`.
///
/// Only `submit` rows carry a payload; the other actions leave the data fields
/// empty.
#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    pub action: Action,
    pub id: Option<String>,
    pub r#type: Option<String>,
    pub amount: Option<Decimal>,
    pub urgent: Option<bool>,
}

/// A validated inbound trigger for the billing engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Submit(BillRequest),
    Process,
    Undo,
    Export,
}

impl TryFrom<CommandRecord> for Command {
    type Error = BillingError;

    fn try_from(record: CommandRecord) -> Result<Self> {
        match record.action {
            Action::Submit => {
                let id = record
                    .id
                    .ok_or_else(|| missing_field("submit requires an id"))?;
                let utility = record
                    .r#type
                    .ok_or_else(|| missing_field("submit requires a utility type"))?;
                let amount = record
                    .amount
                    .ok_or_else(|| missing_field("submit requires an amount"))?
                    .try_into()?;
                let urgent = record
                    .urgent
                    .ok_or_else(|| missing_field("submit requires an urgency flag"))?;
                Ok(Command::Submit(BillRequest::new(id, utility, amount, urgent)))
            }
            Action::Process => Ok(Command::Process),
            Action::Undo => Ok(Command::Undo),
            Action::Export => Ok(Command::Export),
        }
    }
}

fn missing_field(message: &str) -> BillingError {
    BillingError::ValidationError(message.to_string())
}

/// Reads engine commands from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Command>`.
/// It handles whitespace trimming and flexible record lengths automatically;
/// malformed or incomplete rows surface as errors without stopping the stream.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads, deserializes, and validates commands.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader.into_deserialize::<CommandRecord>().map(|result| {
            result
                .map_err(BillingError::from)
                .and_then(Command::try_from)
        })
    }
}
