//! # Core Foundations
//!
//! Cross-cutting types used by every layer: the application error type and
//! the `ApiService` dependency-injection seam.

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
