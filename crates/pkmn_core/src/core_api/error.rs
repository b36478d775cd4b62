use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreErrorCode {
    Io,
    FormatUnrecognized,
    SectionMissing,
    IndexOutOfRange,
    RosterFull,
    InvalidValue,
    UnsupportedOperation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code:?}: {message}")]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub(crate) fn out_of_range(what: &str, index: usize, count: usize) -> Self {
        Self::new(
            CoreErrorCode::IndexOutOfRange,
            format!("{what} index {index} out of range, roster holds {count}"),
        )
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::InvalidValue, message)
    }
}
