//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! Stores never talk to [`crate::services::api::ApiClient`] directly; they
//! hold an `Arc<dyn ApiService>`. Tests inject a mock implementation with
//! call counters instead of a network client.

use async_trait::async_trait;
use shared::dto::auth::{AuthResponse, LoginRequest, ProfileUpdate, User};
use shared::dto::bank::{AddBankAccountRequest, BankAccount};
use shared::dto::notification::Notification;
use shared::dto::referral::{CodeValidity, ReferralCode, ReferralData, ReferralRecord};
use shared::dto::wallet::{
    AddCardRequest, Card, DepositRequest, Transaction, WalletSummary, WithdrawRequest,
};

/// Trait covering every backend operation the stores consume.
///
/// All methods return `Result<T, String>` where the `String` is the
/// normalized, display-ready error message produced at the adapter boundary.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Attach (or clear, with `None`) the bearer token used on every
    /// subsequent request. Called by the session store on login/logout.
    fn set_bearer_token(&self, token: Option<String>);

    // --- session / profile ---

    /// Login with email and password
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, String>;

    /// Fetch the authenticated user's profile
    async fn fetch_profile(&self) -> Result<User, String>;

    /// Update profile fields; returns the updated profile
    async fn update_profile(&self, update: ProfileUpdate) -> Result<User, String>;

    // --- wallet ---

    /// Fetch wallet balance, currency and saved cards
    async fn initialize_wallet(&self) -> Result<WalletSummary, String>;

    /// Fetch the transaction list
    async fn get_transactions(&self) -> Result<Vec<Transaction>, String>;

    /// Deposit via a tokenized payment method; returns the updated wallet
    async fn deposit(&self, request: DepositRequest) -> Result<WalletSummary, String>;

    /// Withdraw to a saved bank account; returns the updated wallet
    async fn withdraw(&self, request: WithdrawRequest) -> Result<WalletSummary, String>;

    /// Save a card for later deposits; returns the stored (masked) card
    async fn add_card(&self, request: AddCardRequest) -> Result<Card, String>;

    // --- bank accounts ---

    /// Fetch saved bank accounts
    async fn get_bank_accounts(&self) -> Result<Vec<BankAccount>, String>;

    /// Add a bank account; returns the stored account
    async fn add_bank_account(&self, request: AddBankAccountRequest) -> Result<BankAccount, String>;

    // --- referrals ---

    /// Fetch aggregate referral data (stats + referral list)
    async fn my_referrals(&self) -> Result<ReferralData, String>;

    /// Fetch the user's own referral code (independent of `my_referrals`)
    async fn fetch_referral_code(&self) -> Result<ReferralCode, String>;

    /// Check whether a referral code exists. A backend 404 is a valid
    /// negative result (`valid: false`), not an error.
    async fn check_referral_code(&self, code: &str) -> Result<CodeValidity, String>;

    /// Link a referral relationship from an entered code
    async fn create_referral(&self, code: &str) -> Result<ReferralRecord, String>;

    // --- notifications ---

    /// Fetch the notification feed
    async fn fetch_notifications(&self) -> Result<Vec<Notification>, String>;

    /// Mark one notification as read
    async fn mark_notification_read(&self, id: &str) -> Result<(), String>;

    /// Backend bulk mark-all-read endpoint. The notification store uses
    /// per-item calls plus a refetch instead (same observable result); this
    /// is kept for backends where the bulk route is preferred.
    async fn mark_all_notifications_read(&self) -> Result<(), String>;

    /// Delete one notification
    async fn delete_notification(&self, id: &str) -> Result<(), String>;

    /// Accept a group invitation carried by a `member_change` notification
    async fn accept_group_invite(&self, group_id: &str, member_id: &str) -> Result<(), String>;

    /// Decline a group invitation
    async fn decline_group_invite(&self, group_id: &str, member_id: &str) -> Result<(), String>;
}
