//! # Common Error Types
//!
//! Consolidated error handling for the dashboard client core.
//!
//! ## Error Categories
//!
//! - **Api**: Backend API communication errors (network, HTTP, JSON parsing),
//!   already normalized to a human-readable message by the HTTP adapter
//! - **Validation**: Local input validation failures; raised before any
//!   network call is made
//! - **State**: Store lifecycle errors (acting on a disposed store, missing
//!   prerequisites such as an unloaded referral code)
//!
//! ## Error Conversion
//!
//! The HTTP adapter's endpoint functions return `Result<T, String>` with the
//! normalized message; `From<String>` lifts those into [`AppError::Api`] so
//! store actions can use `?` directly.

use thiserror::Error;

/// Application-wide error type for the dashboard core.
///
/// Each variant carries the human-readable message that a UI layer surfaces
/// as a toast or inline field error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Backend API communication error.
    ///
    /// Network failures, HTTP error statuses and malformed responses all end
    /// up here, normalized to one message by the adapter: server `message`
    /// field first, then server `error` field, then the transport error,
    /// then a per-action default.
    #[error("API error: {0}")]
    Api(String),

    /// Local input validation error.
    ///
    /// Raised without contacting the server (missing required field,
    /// non-numeric or sub-minimum amount, short IBAN).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store lifecycle or precondition error.
    #[error("State error: {0}")]
    State(String),
}

impl AppError {
    /// The bare message, without the category prefix. This is what gets
    /// stored in a slice's `error` field for display.
    pub fn message(&self) -> &str {
        match self {
            AppError::Api(msg) | AppError::Validation(msg) | AppError::State(msg) => msg,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}
