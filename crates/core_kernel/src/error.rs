//! Kernel errors

use thiserror::Error;

use crate::money::MoneyError;

/// Failure to interpret a kernel value such as a currency code or rounding mode
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
