use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wallet summary (GET /api/wallet/initialize).
///
/// The balance is server-authoritative: the client never performs local
/// arithmetic on it, it only ever displays the last successful value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletSummary {
    pub balance: f64,
    pub currency: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Transaction direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// Transaction lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// A single wallet transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A saved card (masked by the backend, never the full PAN)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: String,
    pub last4: String,
    pub expiry: String,
    pub name: String,
}

/// Payment-method token handed over by the external card collector.
///
/// The deposit flow never sees raw card data, only this opaque id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentToken {
    pub id: String,
}

/// Deposit request (POST /api/wallet/deposit)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub amount: f64,
    /// Always `"card"` for the current product; kept explicit on the wire.
    pub payment_method: String,
    pub token: PaymentToken,
    /// Where the payment provider redirects after 3DS-style confirmation.
    pub return_url: String,
}

/// Withdrawal request (POST /api/wallet/withdraw).
///
/// Sufficient-funds and payout-eligibility checks are server-side only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub amount: f64,
    pub bank_account_id: String,
}

/// Add-card request (POST /api/wallet/add-card).
///
/// Carries raw card fields, unlike the tokenized deposit path. Mirrors the
/// backend contract as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddCardRequest {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub name: String,
}
