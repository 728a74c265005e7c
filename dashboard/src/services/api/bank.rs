//! # Bank Account Endpoints
//!
//! Saved bank accounts for withdrawals. Accounts are created once and never
//! edited or deleted from the client.

use shared::{AddBankAccountRequest, BankAccount};

use super::client::{self, ApiClient};

/// Fetch saved bank accounts.
pub async fn get_bank_accounts(client: &ApiClient) -> Result<Vec<BankAccount>, String> {
    let response = client
        .get("/api/bank/accounts")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        client::parse_json(response).await
    } else {
        Err(client::error_message(response, "Failed to fetch bank accounts").await)
    }
}

/// Add a bank account. The IBAN must already be canonical (no spaces);
/// callers go through the bank store which enforces that.
pub async fn add_bank_account(
    client: &ApiClient,
    request: AddBankAccountRequest,
) -> Result<BankAccount, String> {
    let response = client
        .post("/api/bank/add")
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        client::parse_json(response).await
    } else {
        Err(client::error_message(response, "Failed to add bank account").await)
    }
}
