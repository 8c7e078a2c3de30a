use thiserror::Error;

/// Transaction display and parsing errors.
#[derive(Debug, Error)]
pub enum TxDisplayError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("name resolution failed: {0}")]
    ResolveFailed(String),
}
