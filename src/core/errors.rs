use thiserror::Error;

/// Error type for wallet-session operations.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// Configuration-related errors, including the missing project credential.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Failures reported by the external wallet modal.
    #[error("Modal error: {0}")]
    Modal(String),
    /// Session-state errors (no connection handle, no accounts).
    #[error("Session error: {0}")]
    Session(String),
    /// Numeric/address conversion errors.
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl ConnectError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<anyhow::Error> for ConnectError {
    fn from(err: anyhow::Error) -> Self {
        ConnectError::Modal(err.to_string())
    }
}
