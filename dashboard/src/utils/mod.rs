//! # Utility Functions
//!
//! - `validation`: Local input validation for forms (run before any network call)
//! - `links`: Referral share URL derivation and QR encoding
//! - `image`: Deterministic profile-image URL construction

pub mod image;
pub mod links;
pub mod validation;
