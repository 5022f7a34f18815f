/*
[INPUT]:  Error sources (HTTP transport, exchange payloads, serialization, validation)
[OUTPUT]: Structured error types split into exchange, transport and input failures
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for the Binance futures adapter
#[derive(Error, Debug)]
pub enum FuturesError {
    /// HTTP request failed (connection, timeout, TLS)
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// Exchange returned a structured error payload
    #[error("[Binance {code}] {message}")]
    Api { code: i64, message: String },

    /// Exchange answered with a non-success status and no error payload
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization failed
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL")]
    UrlParse(#[from] url::ParseError),

    /// Order parameters were rejected locally
    #[error("Invalid order")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FuturesError {
    /// Check if the error came from the exchange itself
    pub fn is_api_error(&self) -> bool {
        matches!(self, FuturesError::Api { .. })
    }

    /// Check if the error is a network or response-shape failure
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FuturesError::Http(_)
                | FuturesError::Status { .. }
                | FuturesError::InvalidResponse(_)
                | FuturesError::Serialization(_)
        )
    }

    /// Exchange error code, if any
    pub fn api_code(&self) -> Option<i64> {
        match self {
            FuturesError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Create an API error from a code and message
    pub fn api_error(code: i64, message: impl Into<String>) -> Self {
        FuturesError::Api {
            code,
            message: message.into(),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, FuturesError>;
