//! # Authentication & Profile Endpoints
//!
//! Handles login and the authenticated user's profile.

use shared::{AuthResponse, LoginRequest, ProfileUpdate, User};

use super::client::{self, ApiClient};

/// Login with email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<AuthResponse, String> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let response = client
        .post("/api/auth/login")
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = client::parse_json::<AuthResponse>(response).await;
        if result.is_ok() {
            tracing::info!(duration_ms = duration.as_millis(), "Login successful");
        }
        result
    } else {
        let error = client::error_message(response, "Login failed").await;
        tracing::warn!(
            status = status.as_u16(),
            error = %error,
            duration_ms = duration.as_millis(),
            "Login failed"
        );
        Err(error)
    }
}

/// Fetch the authenticated user's profile.
pub async fn fetch_profile(client: &ApiClient) -> Result<User, String> {
    let response = client
        .get("/api/user/profile")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        client::parse_json(response).await
    } else {
        Err(client::error_message(response, "Failed to fetch profile").await)
    }
}

/// Update profile fields; returns the updated profile.
pub async fn update_profile(client: &ApiClient, update: ProfileUpdate) -> Result<User, String> {
    let response = client
        .put("/api/user/profile")
        .json(&update)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        client::parse_json(response).await
    } else {
        Err(client::error_message(response, "Failed to update profile").await)
    }
}
