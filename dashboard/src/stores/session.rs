//! # Session Store
//!
//! Owns the authenticated user and access token, from login to logout.
//! Login attaches the bearer token to the shared API service so every other
//! store's requests are authorized; logout clears it and resets the slice.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{LoginRequest, ProfileUpdate, User};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// Session state slice
#[derive(Debug, Clone, Default)]
pub struct SessionSlice {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub(crate) generation: u64,
}

/// Session state container
pub struct SessionStore {
    api: Arc<dyn ApiService>,
    slice: Arc<RwLock<SessionSlice>>,
}

impl SessionStore {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            slice: Arc::new(RwLock::new(SessionSlice::default())),
        }
    }

    pub fn snapshot(&self) -> SessionSlice {
        self.slice.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.slice.read().user.clone()
    }

    /// Check if user is authenticated (has valid access token)
    pub fn is_authenticated(&self) -> bool {
        self.slice.read().access_token.is_some()
    }

    /// Login with email and password. On success the bearer token is
    /// attached to the shared API service.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        if email.trim().is_empty() {
            return Err(AppError::Validation("Email is required".into()));
        }
        if password.is_empty() {
            return Err(AppError::Validation("Password is required".into()));
        }

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let generation = self.begin();
        let result = self.api.login(request).await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            return Err(AppError::State("Session store was reset".into()));
        }
        slice.loading = false;
        match result {
            Ok(auth) => {
                self.api.set_bearer_token(Some(auth.access_token.clone()));
                slice.access_token = Some(auth.access_token);
                slice.user = Some(auth.user.clone());
                Ok(auth.user)
            }
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// Fetch the authenticated user's profile.
    pub async fn fetch_profile(&self) -> Result<()> {
        let generation = self.begin();
        let result = self.api.fetch_profile().await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            tracing::debug!("Profile fetch superseded by reset; dropping response");
            return Ok(());
        }
        slice.loading = false;
        match result {
            Ok(user) => {
                slice.user = Some(user);
                Ok(())
            }
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// Update profile fields; adopts the server's updated profile.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User> {
        let generation = self.begin();
        let result = self.api.update_profile(update).await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            return Err(AppError::State("Session store was reset".into()));
        }
        slice.loading = false;
        match result {
            Ok(user) => {
                slice.user = Some(user.clone());
                Ok(user)
            }
            Err(message) => {
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// End the session: detach the bearer token and reset the slice.
    pub fn logout(&self) {
        self.api.set_bearer_token(None);
        self.reset();
    }

    /// Reset to the initial empty slice.
    pub fn reset(&self) {
        let mut slice = self.slice.write();
        let generation = slice.generation + 1;
        *slice = SessionSlice {
            generation,
            ..SessionSlice::default()
        };
    }

    fn begin(&self) -> u64 {
        let mut slice = self.slice.write();
        slice.loading = true;
        slice.error = None;
        slice.generation
    }
}
