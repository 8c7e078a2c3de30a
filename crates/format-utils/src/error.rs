use thiserror::Error;

/// Formatting configuration errors.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid format policy: {0}")]
    InvalidPolicy(String),
}
