//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Two backend quirks are absorbed here so the rest of the crate never sees
//! them:
//!
//! - **Response envelope**: successful payloads arrive either as
//!   `{ "data": ... }` or bare. [`parse_json`] unwraps both into one shape.
//! - **Error shape**: failed responses carry the message in `message`, in
//!   `error`, or not at all. [`error_message`] normalizes that to a single
//!   display-ready string.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::core::service::ApiService;

/// HTTP client for communicating with the affiliate backend API.
///
/// Holds the connection pool, the configured base URL, and the bearer token
/// attached to every request once the session store sets it.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: parking_lot::RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// The request timeout prevents a hung backend from freezing callers.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: parking_lot::RwLock::new(None),
        }
    }

    /// Whether a bearer token is currently attached.
    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.read().as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(format!("{}{}", self.base_url, path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(format!("{}{}", self.base_url, path)))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.put(format!("{}{}", self.base_url, path)))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.delete(format!("{}{}", self.base_url, path)))
    }
}

/// Unwrap the response envelope and deserialize the payload.
///
/// The backend answers either `{ "data": { ... } }` or the bare object; this
/// is the single place that tolerance lives.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let body: Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    serde_json::from_value(unwrap_envelope(body))
        .map_err(|e| format!("Failed to parse response: {}", e))
}

fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Normalize a non-success response to one human-readable message:
/// server `message` field, then server `error` field, then the default
/// tagged with the HTTP status.
pub(crate) async fn error_message(response: Response, default: &str) -> String {
    let status = response.status();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    message_from_body(&body, status, default)
}

fn message_from_body(body: &Value, status: StatusCode, default: &str) -> String {
    for key in ["message", "error"] {
        if let Some(msg) = body.get(key).and_then(Value::as_str) {
            if !msg.is_empty() {
                return msg.to_string();
            }
        }
    }
    format!("{}: {}", default, status)
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    fn set_bearer_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    async fn login(
        &self,
        request: shared::LoginRequest,
    ) -> Result<shared::AuthResponse, String> {
        super::auth::login(self, request).await
    }

    async fn fetch_profile(&self) -> Result<shared::User, String> {
        super::auth::fetch_profile(self).await
    }

    async fn update_profile(
        &self,
        update: shared::ProfileUpdate,
    ) -> Result<shared::User, String> {
        super::auth::update_profile(self, update).await
    }

    async fn initialize_wallet(&self) -> Result<shared::WalletSummary, String> {
        super::wallet::initialize_wallet(self).await
    }

    async fn get_transactions(&self) -> Result<Vec<shared::Transaction>, String> {
        super::wallet::get_transactions(self).await
    }

    async fn deposit(
        &self,
        request: shared::DepositRequest,
    ) -> Result<shared::WalletSummary, String> {
        super::wallet::deposit(self, request).await
    }

    async fn withdraw(
        &self,
        request: shared::WithdrawRequest,
    ) -> Result<shared::WalletSummary, String> {
        super::wallet::withdraw(self, request).await
    }

    async fn add_card(&self, request: shared::AddCardRequest) -> Result<shared::Card, String> {
        super::wallet::add_card(self, request).await
    }

    async fn get_bank_accounts(&self) -> Result<Vec<shared::BankAccount>, String> {
        super::bank::get_bank_accounts(self).await
    }

    async fn add_bank_account(
        &self,
        request: shared::AddBankAccountRequest,
    ) -> Result<shared::BankAccount, String> {
        super::bank::add_bank_account(self, request).await
    }

    async fn my_referrals(&self) -> Result<shared::ReferralData, String> {
        super::referral::my_referrals(self).await
    }

    async fn fetch_referral_code(&self) -> Result<shared::ReferralCode, String> {
        super::referral::fetch_referral_code(self).await
    }

    async fn check_referral_code(&self, code: &str) -> Result<shared::CodeValidity, String> {
        super::referral::check_referral_code(self, code).await
    }

    async fn create_referral(&self, code: &str) -> Result<shared::ReferralRecord, String> {
        super::referral::create_referral(self, code).await
    }

    async fn fetch_notifications(&self) -> Result<Vec<shared::Notification>, String> {
        super::notification::fetch_notifications(self).await
    }

    async fn mark_notification_read(&self, id: &str) -> Result<(), String> {
        super::notification::mark_notification_read(self, id).await
    }

    async fn mark_all_notifications_read(&self) -> Result<(), String> {
        super::notification::mark_all_notifications_read(self).await
    }

    async fn delete_notification(&self, id: &str) -> Result<(), String> {
        super::notification::delete_notification(self, id).await
    }

    async fn accept_group_invite(&self, group_id: &str, member_id: &str) -> Result<(), String> {
        super::notification::accept_group_invite(self, group_id, member_id).await
    }

    async fn decline_group_invite(&self, group_id: &str, member_id: &str) -> Result<(), String> {
        super::notification::decline_group_invite(self, group_id, member_id).await
    }
}
