//! # Bank Account Store
//!
//! Saved bank accounts for withdrawals. Accounts are created via the form
//! and never edited or deleted locally afterwards; the IBAN is canonicalized
//! (spaces stripped, uppercased) before transmission and grouped again for
//! display with [`shared::utils::format_iban`].

use std::sync::Arc;

use parking_lot::RwLock;
use shared::utils::canonicalize_iban;
use shared::{AddBankAccountRequest, BankAccount};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::utils::validation::validate_bank_form;

/// Bank account state slice
#[derive(Debug, Clone, Default)]
pub struct BankSlice {
    pub accounts: Vec<BankAccount>,
    pub loading: bool,
    pub error: Option<String>,
    pub(crate) generation: u64,
}

/// Bank account state container
pub struct BankStore {
    api: Arc<dyn ApiService>,
    slice: Arc<RwLock<BankSlice>>,
}

impl BankStore {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            slice: Arc::new(RwLock::new(BankSlice::default())),
        }
    }

    pub fn snapshot(&self) -> BankSlice {
        self.slice.read().clone()
    }

    pub fn accounts(&self) -> Vec<BankAccount> {
        self.slice.read().accounts.clone()
    }

    /// Fetch saved bank accounts.
    pub async fn fetch_accounts(&self) -> Result<()> {
        let generation = self.begin();
        let result = self.api.get_bank_accounts().await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            tracing::debug!("Bank account fetch superseded by reset; dropping response");
            return Ok(());
        }
        slice.loading = false;
        match result {
            Ok(accounts) => {
                slice.accounts = accounts;
                Ok(())
            }
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// Add a bank account from form input.
    ///
    /// Validates bank name, beneficiary name and IBAN length locally (no
    /// network call on failure); an optional empty BIC is dropped rather
    /// than sent as an empty string.
    pub async fn add_account(
        &self,
        bank_name: &str,
        account_holder_name: &str,
        iban: &str,
        bic: Option<&str>,
    ) -> Result<BankAccount> {
        let check = validate_bank_form(bank_name, account_holder_name, iban);
        if let Some(message) = check.error {
            return Err(AppError::Validation(message));
        }

        let request = AddBankAccountRequest {
            bank_name: bank_name.trim().to_string(),
            account_holder_name: account_holder_name.trim().to_string(),
            iban: canonicalize_iban(iban),
            bic: bic
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        };

        let generation = self.begin();
        let result = self.api.add_bank_account(request).await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            return Err(AppError::State("Bank store was reset".into()));
        }
        slice.loading = false;
        match result {
            Ok(account) => {
                slice.accounts.push(account.clone());
                Ok(account)
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
        *slice = BankSlice {
            generation,
            ..BankSlice::default()
        };
    }

    fn begin(&self) -> u64 {
        let mut slice = self.slice.write();
        slice.loading = true;
        slice.error = None;
        slice.generation
    }
}
