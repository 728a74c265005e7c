//! # Referral Store
//!
//! Affiliate referral program state: headline stats, the referral list, the
//! user's own code and the share link derived from it.
//!
//! The stats and the code come from two independent endpoints merged into
//! one slice. Merge order matters: [`ReferralStore::fetch_my_referrals`]
//! replaces the whole structure, while [`ReferralStore::fetch_referral_code`]
//! patches only the nested code field so previously loaded stats survive.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{CodeValidity, ReferralCode, ReferralData, ReferralRecord};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::utils::links;
use crate::utils::validation::validate_referral_code;

/// Referral state slice
#[derive(Debug, Clone, Default)]
pub struct ReferralSlice {
    pub data: Option<ReferralData>,
    pub code_validity: Option<CodeValidity>,
    pub loading: bool,
    pub error: Option<String>,
    pub(crate) generation: u64,
}

/// Referral state container
pub struct ReferralStore {
    api: Arc<dyn ApiService>,
    slice: Arc<RwLock<ReferralSlice>>,
}

impl ReferralStore {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            slice: Arc::new(RwLock::new(ReferralSlice::default())),
        }
    }

    pub fn snapshot(&self) -> ReferralSlice {
        self.slice.read().clone()
    }

    /// The user's own referral code, once loaded.
    pub fn referral_code(&self) -> Option<String> {
        self.slice
            .read()
            .data
            .as_ref()
            .and_then(|d| d.affiliate_stats.referral_code.clone())
    }

    /// Fetch aggregate referral data; replaces the whole structure.
    pub async fn fetch_my_referrals(&self) -> Result<()> {
        let generation = self.begin();
        let result = self.api.my_referrals().await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            tracing::debug!("Referral fetch superseded by reset; dropping response");
            return Ok(());
        }
        slice.loading = false;
        match result {
            Ok(data) => {
                slice.data = Some(data);
                Ok(())
            }
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// Fetch the user's own code; patches only the nested code field so a
    /// previously loaded stats/list structure is never clobbered.
    pub async fn fetch_referral_code(&self) -> Result<ReferralCode> {
        let generation = self.begin();
        let result = self.api.fetch_referral_code().await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            return Err(AppError::State("Referral store was reset".into()));
        }
        slice.loading = false;
        match result {
            Ok(code) => {
                slice
                    .data
                    .get_or_insert_with(ReferralData::default)
                    .affiliate_stats
                    .referral_code = Some(code.referral_code.clone());
                Ok(code)
            }
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// Link a referral relationship from an entered code.
    ///
    /// Only the non-empty check is local; uniqueness, self-referral
    /// prevention and existence are server concerns surfaced as API errors.
    pub async fn create_referral(&self, code: &str) -> Result<ReferralRecord> {
        let check = validate_referral_code(code);
        if let Some(message) = check.error {
            let mut slice = self.slice.write();
            slice.error = Some(message.clone());
            return Err(AppError::Validation(message));
        }

        let generation = self.begin();
        let result = self.api.create_referral(code.trim()).await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            return Err(AppError::State("Referral store was reset".into()));
        }
        slice.loading = false;
        match result {
            Ok(record) => Ok(record),
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// Check whether a referral code exists. "Not found" is a valid
    /// negative result (`valid: false`), not an error.
    pub async fn check_code(&self, code: &str) -> Result<CodeValidity> {
        let check = validate_referral_code(code);
        if let Some(message) = check.error {
            let mut slice = self.slice.write();
            slice.error = Some(message.clone());
            return Err(AppError::Validation(message));
        }

        let generation = self.begin();
        let result = self.api.check_referral_code(code.trim()).await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            return Err(AppError::State("Referral store was reset".into()));
        }
        slice.loading = false;
        match result {
            Ok(validity) => {
                slice.code_validity = Some(validity.clone());
                Ok(validity)
            }
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// The registration deep link for the loaded code:
    /// `<origin>/register?ref=<code>`.
    pub fn referral_url(&self, origin: &str) -> Result<String> {
        let code = self
            .referral_code()
            .ok_or_else(|| AppError::State("Referral code not loaded yet".into()))?;
        Ok(links::referral_url(origin, &code))
    }

    /// SVG QR code encoding exactly the registration deep link.
    pub fn referral_qr_svg(&self, origin: &str) -> Result<String> {
        let code = self
            .referral_code()
            .ok_or_else(|| AppError::State("Referral code not loaded yet".into()))?;
        links::referral_qr_svg(origin, &code)
    }

    /// Reset to the initial empty slice; used on logout or unmount.
    pub fn reset(&self) {
        let mut slice = self.slice.write();
        let generation = slice.generation + 1;
        *slice = ReferralSlice {
            generation,
            ..ReferralSlice::default()
        };
    }

    fn begin(&self) -> u64 {
        let mut slice = self.slice.write();
        slice.loading = true;
        slice.error = None;
        slice.generation
    }
}
