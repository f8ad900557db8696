//! Board-specific error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("unrecognized timezone: {0}")]
    UnknownZone(String),

    #[error("invalid time of day: {0}")]
    InvalidTime(String),
}

pub type BoardResult<T> = Result<T, BoardError>;
