use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved bank account (GET /api/bank/accounts).
///
/// `iban` is canonical on the wire (uppercase, no spaces); display grouping
/// is applied with [`crate::utils::format_iban`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(rename = "_id")]
    pub id: String,
    pub bank_name: String,
    pub account_holder_name: String,
    pub iban: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

/// Add-bank-account request (POST /api/bank/add)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddBankAccountRequest {
    pub bank_name: String,
    pub account_holder_name: String,
    pub iban: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
}
