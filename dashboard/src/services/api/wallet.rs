//! # Wallet Endpoints
//!
//! Wallet state and money movement (initialize, transactions, deposit,
//! withdraw, add-card). The server is the sole authority on balances; every
//! money-movement call returns the updated wallet summary and callers adopt
//! it verbatim.

use shared::{AddCardRequest, Card, DepositRequest, Transaction, WalletSummary, WithdrawRequest};

use super::client::{self, ApiClient};

/// Fetch wallet balance, currency and saved cards.
pub async fn initialize_wallet(client: &ApiClient) -> Result<WalletSummary, String> {
    let response = client
        .get("/api/wallet/initialize")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        client::parse_json(response).await
    } else {
        Err(client::error_message(response, "Failed to initialize wallet").await)
    }
}

/// Fetch the transaction list.
pub async fn get_transactions(client: &ApiClient) -> Result<Vec<Transaction>, String> {
    let response = client
        .get("/api/wallet/transactions")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        client::parse_json(response).await
    } else {
        Err(client::error_message(response, "Failed to fetch transactions").await)
    }
}

/// Deposit via a tokenized payment method.
///
/// Only the payment-method id from the external card collector crosses this
/// boundary, never raw card data.
#[tracing::instrument(skip(client, request), fields(amount = request.amount))]
pub async fn deposit(client: &ApiClient, request: DepositRequest) -> Result<WalletSummary, String> {
    let response = client
        .post("/api/wallet/deposit")
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Deposit network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("Deposit accepted");
        client::parse_json(response).await
    } else {
        let error = client::error_message(response, "Deposit failed").await;
        tracing::warn!(status = status.as_u16(), error = %error, "Deposit failed");
        Err(error)
    }
}

/// Withdraw to a saved bank account.
#[tracing::instrument(skip(client, request), fields(amount = request.amount))]
pub async fn withdraw(
    client: &ApiClient,
    request: WithdrawRequest,
) -> Result<WalletSummary, String> {
    let response = client
        .post("/api/wallet/withdraw")
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Withdrawal network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("Withdrawal submitted");
        client::parse_json(response).await
    } else {
        let error = client::error_message(response, "Withdrawal failed").await;
        tracing::warn!(status = status.as_u16(), error = %error, "Withdrawal failed");
        Err(error)
    }
}

/// Save a card for later deposits; returns the stored (masked) card.
pub async fn add_card(client: &ApiClient, request: AddCardRequest) -> Result<Card, String> {
    let response = client
        .post("/api/wallet/add-card")
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        client::parse_json(response).await
    } else {
        Err(client::error_message(response, "Failed to add card").await)
    }
}
