use thiserror::Error;

/// Error reported by a remote driver, carrying the store's native
/// error code.
///
/// Codes are passed through from the remote system unchanged; 0 means
/// success and is never wrapped in a `DriverError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("remote error {code}: {message}")]
pub struct DriverError {
    code: i32,
    message: String,
}

impl DriverError {
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The remote store's native error code.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum LayoutDbError {
    /// Failure surfaced by the remote driver, code preserved.
    #[error(transparent)]
    Remote(#[from] DriverError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parameter error: {0}")]
    ParameterError(String),

    #[error("Unimplemented feature: {0}")]
    Unimplemented(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl LayoutDbError {
    /// The remote error code, if this error came from the driver.
    #[must_use]
    pub fn remote_code(&self) -> Option<i32> {
        match self {
            LayoutDbError::Remote(err) => Some(err.code()),
            _ => None,
        }
    }
}

/// Classify a client result as clean or erroneous.
///
/// Returns 0 for `Ok`, the remote code for driver failures, and -1 for
/// failures that never reached the remote system.
#[must_use]
pub fn error_code<T>(result: &Result<T, LayoutDbError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err) => err.remote_code().unwrap_or(-1),
    }
}
