use std::fmt;
use std::io::{self, Write};

use chrono::NaiveDateTime;
use getset::{CopyGetters, Getters};

/// ISO-8601 without offset. Fractional seconds are only printed when non-zero.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// One row of a transaction ledger.
///
/// Fields are fixed at construction and only exposed through getters.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct TransactionRecord {
    #[getset(get_copy = "pub")]
    timestamp: NaiveDateTime,
    #[getset(get_copy = "pub")]
    amount: f64,
    #[getset(get = "pub")]
    description: String,
    #[getset(get = "pub")]
    category: String,
}

impl TransactionRecord {
    pub fn new(
        timestamp: NaiveDateTime,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> TransactionRecord {
        TransactionRecord {
            timestamp,
            amount,
            description: description.into(),
            category: category.into(),
        }
    }

    /// Renders `timestamp,amount,description,category`.
    ///
    /// Text fields are inserted as they are. A comma or newline inside
    /// `description` or `category` is not quoted, so such a line will not
    /// read back as the same four fields.
    pub fn to_line(&self) -> String {
        self.to_string()
    }

    /// Writes the line followed by `\n`.
    pub fn write_line<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self)
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.amount,
            self.description,
            self.category,
        )
    }
}
