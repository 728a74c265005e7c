//! # Affiliate Dashboard Client Core - Library Root
//!
//! The data-synchronization layer of the affiliate finance dashboard: typed
//! stores over a remote REST API, with no rendering concerns. A UI layer
//! (native or web) owns the [`stores::Stores`] container, calls store actions
//! from user events, and renders store snapshots.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  stores        - One state container per resource       │
//! │  services/api  - HTTP adapter + per-resource endpoints  │
//! │  core          - AppError + ApiService seam             │
//! │  Reqwest       - HTTP client                            │
//! │  Tokio         - Async runtime                          │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (Bearer token, JSON)
//!          ▼
//! ┌─────────────────┐
//! │  Affiliate API  │
//! │  (remote host)  │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: Cross-cutting foundations
//!   - `error`: [`core::error::AppError`] and the crate `Result` alias
//!   - `service`: [`core::service::ApiService`], the dependency-injection
//!     seam stores consume (mockable in tests)
//!
//! - **services**: External integrations
//!   - `api`: HTTP adapter ([`services::api::ApiClient`]) plus one endpoint
//!     module per backend resource
//!
//! - **stores**: State containers with the `idle -> loading -> {ready, error}`
//!   contract: session, wallet, bank accounts, referrals, notifications
//!
//! - **utils**: Input validation, referral share links/QR, profile image URLs
//!
//! ## Store Contract
//!
//! Every store action that touches the network sets `loading` and clears
//! `error` up front, applies the server response (or the normalized error
//! message) on completion, and always clears `loading`. Responses that
//! resolve after the store was reset (logout, unmount) are dropped via a
//! per-slice generation counter.

pub mod config;
pub mod core;
pub mod services;
pub mod stores;
pub mod utils;

pub use config::Config;
pub use core::error::{AppError, Result};
pub use core::service::ApiService;
pub use services::api::ApiClient;
pub use stores::Stores;
