//! Shared error type across textlens crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing or malformed input.
    BadRequest,
    /// Document store rejected a write.
    StoreWrite,
    /// Document store query failed.
    StoreQuery,
    /// Startup configuration invalid or missing.
    Config,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::StoreWrite => "STORE_WRITE",
            ClientCode::StoreQuery => "STORE_QUERY",
            ClientCode::Config => "CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TextLensError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum TextLensError {
    /// "analyze" was called without usable text.
    #[error("No text provided")]
    NoText,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("store write failed: {0}")]
    StoreWrite(String),
    #[error("store query failed: {0}")]
    StoreQuery(String),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TextLensError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TextLensError::NoText | TextLensError::BadRequest(_) => ClientCode::BadRequest,
            TextLensError::StoreWrite(_) => ClientCode::StoreWrite,
            TextLensError::StoreQuery(_) => ClientCode::StoreQuery,
            TextLensError::Config(_) => ClientCode::Config,
            TextLensError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Whether the caller is at fault (400-class) rather than the service.
    pub fn is_client_error(&self) -> bool {
        self.client_code() == ClientCode::BadRequest
    }
}
