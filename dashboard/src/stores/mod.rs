//! # Domain Stores
//!
//! One state container per remote resource. Each store is the single source
//! of truth for its slice: views hold only transient form input and render
//! store snapshots; all reads and writes go through the store's async
//! actions.
//!
//! ## The store contract
//!
//! Every network action follows `idle -> loading -> {ready, error}`:
//!
//! 1. set `loading = true`, clear `error`
//! 2. await the API call (the only suspension point)
//! 3. on success replace the slice data with the server response; on failure
//!    store the normalized message in `error`
//! 4. clear `loading` on every path
//!
//! There is no request queuing or coalescing: two rapid submits issue two
//! independent requests and the last response wins. What *is* guarded is
//! the store lifecycle: every slice carries a generation counter bumped by
//! `reset()`, and a response that resolves against a stale generation is
//! dropped instead of resurrecting pre-logout state.
//!
//! ## Lifecycle
//!
//! Stores are explicit, constructor-injected containers (no process-wide
//! singletons): [`Stores::new`] wires every store to one shared
//! [`ApiService`] at session start, and [`Stores::logout`] clears the bearer
//! token and resets every slice at session end.

use std::sync::Arc;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::services::api::ApiClient;

pub mod bank;
pub mod notification;
pub mod referral;
pub mod session;
pub mod wallet;

pub use bank::BankStore;
pub use notification::NotificationStore;
pub use referral::ReferralStore;
pub use session::SessionStore;
pub use wallet::WalletStore;

/// All domain stores over one shared API service.
pub struct Stores {
    pub session: SessionStore,
    pub wallet: WalletStore,
    pub bank: BankStore,
    pub referral: ReferralStore,
    pub notifications: NotificationStore,
}

impl Stores {
    /// Construct every store over the given API service.
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            session: SessionStore::new(Arc::clone(&api)),
            wallet: WalletStore::new(Arc::clone(&api)),
            bank: BankStore::new(Arc::clone(&api)),
            referral: ReferralStore::new(Arc::clone(&api)),
            notifications: NotificationStore::new(api),
        }
    }

    /// Construct stores over a real HTTP client built from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(ApiClient::new(config)))
    }

    /// Initial dashboard load: wallet, transactions, referral data and bank
    /// accounts are fetched concurrently and awaited jointly. The first
    /// failure is returned for the caller's full-page error panel; each
    /// store still records its own `error` for inline display.
    pub async fn load_dashboard(&self) -> Result<()> {
        let (wallet, transactions, referrals, bank) = futures::join!(
            self.wallet.initialize(),
            self.wallet.refresh_transactions(),
            self.referral.fetch_my_referrals(),
            self.bank.fetch_accounts(),
        );

        wallet?;
        transactions?;
        referrals?;
        bank?;
        Ok(())
    }

    /// End the session: clear the bearer token and reset every slice.
    /// In-flight responses resolving after this point are dropped by the
    /// per-slice generation guard.
    pub fn logout(&self) {
        self.session.logout();
        self.wallet.reset();
        self.bank.reset();
        self.referral.reset();
        self.notifications.reset();
    }
}
