//! # Wallet Store
//!
//! Single source of truth for wallet state: balance, currency, transaction
//! list and saved cards.
//!
//! The balance is never computed locally. Every money-movement action
//! adopts the wallet summary returned by the server, so the displayed
//! balance cannot silently diverge from the last successful response.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{AddCardRequest, Card, DepositRequest, PaymentToken, Transaction, WalletSummary,
    WithdrawRequest};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::utils::validation::{parse_amount, validate_card_form};

/// Wallet state slice
#[derive(Debug, Clone, Default)]
pub struct WalletSlice {
    pub balance: f64,
    pub currency: String,
    pub transactions: Vec<Transaction>,
    pub cards: Vec<Card>,
    pub loading: bool,
    pub error: Option<String>,
    pub(crate) generation: u64,
}

/// Wallet state container
pub struct WalletStore {
    api: Arc<dyn ApiService>,
    slice: Arc<RwLock<WalletSlice>>,
}

impl WalletStore {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            slice: Arc::new(RwLock::new(WalletSlice::default())),
        }
    }

    pub fn snapshot(&self) -> WalletSlice {
        self.slice.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.slice.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.slice.read().error.clone()
    }

    /// Fetch wallet balance, currency and saved cards.
    pub async fn initialize(&self) -> Result<()> {
        let generation = self.begin();
        let result = self.api.initialize_wallet().await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            tracing::debug!("Wallet initialize superseded by reset; dropping response");
            return Ok(());
        }
        slice.loading = false;
        match result {
            Ok(summary) => {
                Self::adopt_summary(&mut slice, summary);
                Ok(())
            }
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// Fetch the transaction list.
    pub async fn refresh_transactions(&self) -> Result<()> {
        let generation = self.begin();
        let result = self.api.get_transactions().await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            tracing::debug!("Transaction refresh superseded by reset; dropping response");
            return Ok(());
        }
        slice.loading = false;
        match result {
            Ok(transactions) => {
                slice.transactions = transactions;
                Ok(())
            }
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// Deposit via a tokenized payment method.
    ///
    /// `payment_method_id` comes from the external card collector; this
    /// store never sees raw card data on the deposit path. `return_url` is
    /// where the payment provider redirects after confirmation.
    ///
    /// Rejects empty, non-numeric or sub-minimum amounts locally, with no
    /// network call.
    pub async fn deposit(
        &self,
        amount_input: &str,
        payment_method_id: &str,
        return_url: &str,
    ) -> Result<WalletSummary> {
        let amount = parse_amount(amount_input)
            .ok_or_else(|| AppError::Validation("Valid amount (minimum 1) is required".into()))?;

        let request = DepositRequest {
            amount,
            payment_method: "card".to_string(),
            token: PaymentToken {
                id: payment_method_id.to_string(),
            },
            return_url: return_url.to_string(),
        };

        let generation = self.begin();
        let result = self.api.deposit(request).await;
        self.settle_money_movement(generation, result)
    }

    /// Withdraw to a saved bank account.
    ///
    /// Requires a valid amount and a selected account; sufficient-funds
    /// checks are entirely server-side.
    pub async fn withdraw(
        &self,
        amount_input: &str,
        bank_account_id: &str,
    ) -> Result<WalletSummary> {
        let amount = parse_amount(amount_input)
            .ok_or_else(|| AppError::Validation("Valid amount (minimum 1) is required".into()))?;

        if bank_account_id.trim().is_empty() {
            return Err(AppError::Validation("Please select a bank account".into()));
        }

        let request = WithdrawRequest {
            amount,
            bank_account_id: bank_account_id.to_string(),
        };

        let generation = self.begin();
        let result = self.api.withdraw(request).await;
        self.settle_money_movement(generation, result)
    }

    /// Save a card for later deposits.
    ///
    /// The number is canonicalized (spaces stripped) before submission.
    /// Checksum and expiry validity are delegated to the payment processor.
    pub async fn add_card(
        &self,
        card_number: &str,
        expiry: &str,
        cvv: &str,
        name: &str,
    ) -> Result<Card> {
        let check = validate_card_form(card_number, expiry, cvv, name);
        if let Some(message) = check.error {
            return Err(AppError::Validation(message));
        }

        let request = AddCardRequest {
            card_number: shared::utils::canonicalize_card_number(card_number),
            expiry: expiry.to_string(),
            cvv: cvv.to_string(),
            name: name.to_string(),
        };

        let generation = self.begin();
        let result = self.api.add_card(request).await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            return Err(AppError::State("Wallet store was reset".into()));
        }
        slice.loading = false;
        match result {
            Ok(card) => {
                slice.cards.push(card.clone());
                Ok(card)
            }
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// Reset to the initial empty slice; used on logout or unmount.
    pub fn reset(&self) {
        let mut slice = self.slice.write();
        let generation = slice.generation + 1;
        *slice = WalletSlice {
            generation,
            ..WalletSlice::default()
        };
    }

    fn begin(&self) -> u64 {
        let mut slice = self.slice.write();
        slice.loading = true;
        slice.error = None;
        slice.generation
    }

    fn settle_money_movement(
        &self,
        generation: u64,
        result: std::result::Result<WalletSummary, String>,
    ) -> Result<WalletSummary> {
        let mut slice = self.slice.write();
        if slice.generation != generation {
            return Err(AppError::State("Wallet store was reset".into()));
        }
        slice.loading = false;
        match result {
            Ok(summary) => {
                Self::adopt_summary(&mut slice, summary.clone());
                Ok(summary)
            }
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    fn adopt_summary(slice: &mut WalletSlice, summary: WalletSummary) {
        slice.balance = summary.balance;
        slice.currency = summary.currency;
        // Money-movement responses omit the card list; keep the loaded one.
        if !summary.cards.is_empty() {
            slice.cards = summary.cards;
        }
    }
}
