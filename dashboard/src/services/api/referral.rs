//! # Referral Endpoints
//!
//! Affiliate referral program: aggregate stats, the user's own code, code
//! existence checks and referral creation.

use reqwest::StatusCode;
use shared::{CodeValidity, CreateReferralRequest, ReferralCode, ReferralData, ReferralRecord};

use super::client::{self, ApiClient};

/// Fetch aggregate referral data (stats + referral list).
pub async fn my_referrals(client: &ApiClient) -> Result<ReferralData, String> {
    let response = client
        .get("/api/user/referral/my-referrals")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        client::parse_json(response).await
    } else {
        Err(client::error_message(response, "Failed to fetch referral data").await)
    }
}

/// Fetch the user's own referral code.
///
/// Served independently of [`my_referrals`]; the referral store merges the
/// result into its slice by patching only the nested code field.
pub async fn fetch_referral_code(client: &ApiClient) -> Result<ReferralCode, String> {
    let response = client
        .get("/api/referral/fetch-referral")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        client::parse_json(response).await
    } else {
        Err(client::error_message(response, "Failed to fetch referral code").await)
    }
}

/// Path for a code existence check. Codes are plain tokens but arrive from
/// a free-text input, so the segment is percent-encoded.
fn check_path(code: &str) -> String {
    format!("/api/referral/check/{}", urlencoding::encode(code))
}

/// Check whether a referral code exists.
///
/// A 404 means "no such code" and is a valid negative result, not an error.
pub async fn check_referral_code(client: &ApiClient, code: &str) -> Result<CodeValidity, String> {
    let response = client
        .get(&check_path(code))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        client::parse_json(response).await
    } else if status == StatusCode::NOT_FOUND {
        Ok(CodeValidity { valid: false })
    } else {
        Err(client::error_message(response, "Failed to check referral code").await)
    }
}

/// Link a referral relationship from an entered code.
///
/// Uniqueness, self-referral prevention and code existence are server-side
/// concerns surfaced through the error message.
pub async fn create_referral(client: &ApiClient, code: &str) -> Result<ReferralRecord, String> {
    let request = CreateReferralRequest {
        referral_code: code.to_string(),
    };

    let response = client
        .post("/api/referral/create-referral")
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        client::parse_json(response).await
    } else {
        Err(client::error_message(response, "Failed to create referral").await)
    }
}
