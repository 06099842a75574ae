use std::io::Write;

use anyhow::Result;
use chrono::NaiveDateTime;
use log::debug;

use crate::ledger::record::{TransactionRecord, TIMESTAMP_FORMAT};
use crate::ledger::RecordError;


const SPACED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Raw positional values as they come from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordArgs {
    pub timestamp: String,
    pub amount: String,
    pub description: String,
    pub category: String,
}

impl RecordArgs {
    pub fn from_args<I>(args: I) -> Result<RecordArgs, RecordError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut next = |name: &'static str| args.next().ok_or(RecordError::MissingField(name));

        let record_args = RecordArgs {
            timestamp: next("timestamp")?,
            amount: next("amount")?,
            description: next("description")?,
            category: next("category")?,
        };

        if let Some(extra) = args.next() {
            return Err(RecordError::UnexpectedArgument(extra));
        }

        Ok(record_args)
    }
}

impl TryFrom<RecordArgs> for TransactionRecord {
    type Error = RecordError;

    fn try_from(args: RecordArgs) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&args.timestamp)?;
        let amount = args
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|source| RecordError::InvalidAmount {
                value: args.amount.clone(),
                source,
            })?;

        Ok(TransactionRecord::new(timestamp, amount, args.description, args.category))
    }
}

/// Accepts `2024-01-15T10:30:00` as well as `2024-01-15 10:30:00`.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, RecordError> {
    let value = value.trim();

    match NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT) {
        Ok(timestamp) => Ok(timestamp),
        Err(source) => match NaiveDateTime::parse_from_str(value, SPACED_TIMESTAMP_FORMAT) {
            Ok(timestamp) => {
                debug!("parsed space separated timestamp, value={}", value);
                Ok(timestamp)
            },
            Err(_) => Err(RecordError::InvalidTimestamp {
                value: value.to_string(),
                source,
            }),
        },
    }
}

pub fn export_lines<'a, I, W>(records: I, mut writer: W) -> Result<()>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
    W: Write,
{
    let mut count = 0;
    for record in records {
        record.write_line(&mut writer)?;
        count += 1;
    }

    writer.flush()?;
    debug!("exported records, count={}", count);

    Ok(())
}
