//! # Shared Data Transfer Objects Library
//!
//! This library defines the JSON contract between the dashboard client and the
//! affiliate backend API. All DTOs use `serde` for serialization.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects, one module per backend resource
//!   - **[`dto::auth`]**: Session, user profile and login DTOs
//!   - **[`dto::wallet`]**: Wallet balance, transactions, cards and money movement
//!   - **[`dto::bank`]**: Saved bank accounts
//!   - **[`dto::referral`]**: Affiliate stats, referral records and code checks
//!   - **[`dto::notification`]**: In-app notification feed
//! - **[`utils`]**: Display formatting shared between client and any rendering layer
//!   (IBAN grouping, card-number grouping, expiry input, currency display)
//!
//! ## Wire Format
//!
//! The backend is a JavaScript service, so the wire format follows its
//! conventions rather than Rust defaults:
//! - Field names are **camelCase** (`#[serde(rename_all = "camelCase")]` on
//!   every DTO)
//! - Primary keys arrive as Mongo-style **`_id`** strings
//! - Optional fields are omitted from JSON when `None`
//! - Successful responses may wrap the payload in a `{ "data": ... }`
//!   envelope; unwrapping happens at the HTTP adapter, DTOs model the
//!   unwrapped shape only

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
