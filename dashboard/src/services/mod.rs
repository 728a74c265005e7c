//! # External Integrations
//!
//! - `api`: HTTP client for the affiliate backend REST API

pub mod api;
