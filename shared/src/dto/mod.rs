//! # Data Transfer Objects (DTOs)
//!
//! All data structures used for communication between the dashboard client and
//! the backend REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Session, login and user profile DTOs
//! - [`wallet`] - Wallet balance, transactions, cards, deposit/withdraw requests
//! - [`bank`] - Saved bank account DTOs
//! - [`referral`] - Affiliate stats, referral records, code-check DTOs
//! - [`notification`] - In-app notification feed DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: camelCase on the wire (backend convention)
//! - **Ids**: Mongo-style `_id` strings, renamed to `id` in Rust
//! - **Optional fields**: Omitted when `None` using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to snake_case strings; unknown notification kinds
//!   decode to a catch-all variant so a backend rollout never breaks the feed
//!
//! ## Example Request/Response Pair
//!
//! ```text
//! POST /api/referral/create-referral
//! Authorization: Bearer eyJhbGciOiJIUzI1...
//! Content-Type: application/json
//!
//! { "referral_code": "ABC123" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "data": { "referralId": "r1", "status": "pending",
//!             "user": { "name": "Alice", "email": "alice@example.com",
//!                       "joinDate": "2024-01-01T00:00:00Z" } } }
//! ```

pub mod auth;
pub mod bank;
pub mod notification;
pub mod referral;
pub mod wallet;

pub use auth::*;
pub use bank::*;
pub use notification::*;
pub use referral::*;
pub use wallet::*;
