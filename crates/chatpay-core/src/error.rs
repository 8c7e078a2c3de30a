use thiserror::Error;

use format_utils::FormatError;
use tx_display::TxDisplayError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("formatting failed: {0}")]
    FormatFailed(String),
}

impl From<TxDisplayError> for CoreError {
    fn from(e: TxDisplayError) -> Self {
        match e {
            TxDisplayError::InvalidAmount(msg) => CoreError::InvalidAmount(msg),
            other => CoreError::InvalidRecipient(other.to_string()),
        }
    }
}

impl From<FormatError> for CoreError {
    fn from(e: FormatError) -> Self {
        CoreError::FormatFailed(e.to_string())
    }
}
