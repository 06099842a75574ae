use std::num::ParseFloatError;

use thiserror::Error;

pub mod record;


#[derive(Debug, PartialEq, Error)]
pub enum RecordError {
    #[error("missing {0}")]
    MissingField(&'static str),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },
    #[error("invalid amount '{value}': {source}")]
    InvalidAmount { value: String, source: ParseFloatError },
}
