//! # Notification Endpoints
//!
//! Server-pushed notification feed: fetch, per-item and bulk mark-as-read,
//! delete, and the inline group-invitation responses carried by
//! `member_change` notifications.

use shared::Notification;

use super::client::{self, ApiClient};

/// Fetch the notification feed.
pub async fn fetch_notifications(client: &ApiClient) -> Result<Vec<Notification>, String> {
    let response = client
        .get("/api/notification/fetch")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        client::parse_json(response).await
    } else {
        Err(client::error_message(response, "Failed to fetch notifications").await)
    }
}

/// Mark one notification as read.
pub async fn mark_notification_read(client: &ApiClient, id: &str) -> Result<(), String> {
    let response = client
        .put(&format!("/api/notification/{}/read", id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(client::error_message(response, "Failed to mark notification as read").await)
    }
}

/// Bulk mark-all-read endpoint.
///
/// The store path issues per-item calls plus a refetch instead; this route
/// is kept for backends where the bulk endpoint is preferred, with the same
/// observable result (zero unread).
pub async fn mark_all_notifications_read(client: &ApiClient) -> Result<(), String> {
    let response = client
        .put("/api/notification/mark-all-read")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(client::error_message(response, "Failed to mark notifications as read").await)
    }
}

/// Delete one notification.
pub async fn delete_notification(client: &ApiClient, id: &str) -> Result<(), String> {
    let response = client
        .delete(&format!("/api/notification/{}", id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(client::error_message(response, "Failed to delete notification").await)
    }
}

/// Accept a group invitation: adds the invited member to the group.
pub async fn accept_group_invite(
    client: &ApiClient,
    group_id: &str,
    member_id: &str,
) -> Result<(), String> {
    let body = serde_json::json!({ "memberId": member_id });

    let response = client
        .put(&format!("/api/group/{}/members", group_id))
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(client::error_message(response, "Failed to accept invitation").await)
    }
}

/// Decline a group invitation.
pub async fn decline_group_invite(
    client: &ApiClient,
    group_id: &str,
    member_id: &str,
) -> Result<(), String> {
    let body = serde_json::json!({ "memberId": member_id });

    let response = client
        .put(&format!("/api/group/{}/decline-invite", group_id))
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(client::error_message(response, "Failed to decline invitation").await)
    }
}
