use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate referral data (GET /api/user/referral/my-referrals).
///
/// `affiliate_stats.referral_code` is also served by a second, independent
/// endpoint (GET /api/referral/fetch-referral). The referral store merges
/// that call into this structure by patching only the nested code field;
/// replacing the whole object would drop previously loaded stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralData {
    #[serde(default)]
    pub affiliate_stats: AffiliateStats,
    #[serde(default)]
    pub referrals: Vec<ReferralRecord>,
}

/// Affiliate headline figures
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub total_referrals: u32,
    #[serde(default)]
    pub active_referrals: u32,
    #[serde(default)]
    pub total_bonus_earned: f64,
}

/// Status of a referred user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReferralStatus {
    Pending,
    Active,
    #[serde(other)]
    #[default]
    Other,
}

/// One referral relationship.
///
/// The referred person's identity lives in a nested `user` sub-object that
/// the backend omits while the signup is incomplete, so every field under it
/// is display-optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRecord {
    pub referral_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ReferredUser>,
    #[serde(default)]
    pub status: ReferralStatus,
}

/// The referred person inside a [`ReferralRecord`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferredUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<DateTime<Utc>>,
}

/// Own referral code (GET /api/referral/fetch-referral)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralCode {
    pub referral_code: String,
}

/// Create-referral request (POST /api/referral/create-referral).
///
/// snake_case on the wire, unlike the rest of the API. Backend quirk, part
/// of the contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateReferralRequest {
    pub referral_code: String,
}

/// Result of a referral-code existence check.
///
/// A 404 from GET /api/referral/check/{code} is a valid negative result and
/// is mapped to `valid: false` rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeValidity {
    pub valid: bool,
}
