//! # Backend API Client Module
//!
//! HTTP client for communicating with the affiliate backend REST API.
//! Handles authentication, wallet money movement, bank accounts, referrals
//! and the notification feed.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient struct, bearer token, response unwrapping
//! ├── auth.rs         - Login and profile endpoints
//! ├── wallet.rs       - Wallet endpoints (initialize, transactions, deposit,
//! │                     withdraw, add-card)
//! ├── bank.rs         - Bank account endpoints (fetch, add)
//! ├── referral.rs     - Referral endpoints (my-referrals, own code, check,
//! │                     create)
//! └── notification.rs - Notification endpoints (fetch, read, delete, group
//!                       invite responses)
//! ```
//!
//! ## Conventions
//!
//! Every endpoint function takes `&ApiClient`, returns `Result<T, String>`
//! with a normalized display-ready message on failure, and consumes the
//! single unwrapped response shape produced by
//! [`client::parse_json`] (the backend wraps some payloads in a
//! `{ "data": ... }` envelope and sends others bare).

pub mod auth;
pub mod bank;
pub mod client;
pub mod notification;
pub mod referral;
pub mod wallet;

pub use client::ApiClient;
