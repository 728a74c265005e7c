use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Business event kind of a notification.
///
/// Unknown kinds sent by newer backends decode to [`NotificationKind::Other`]
/// so the feed keeps rendering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PaymentReminder,
    PaymentConfirmation,
    GroupUpdate,
    MemberChange,
    AddedToGroup,
    RemovedFromGroup,
    SettingsChange,
    PayoutScheduled,
    #[serde(other)]
    #[default]
    Other,
}

impl NotificationKind {
    /// Human-readable label for feed headers
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::PaymentReminder => "Payment Due",
            NotificationKind::PaymentConfirmation => "Payment Confirmed",
            NotificationKind::GroupUpdate => "Group Update",
            NotificationKind::MemberChange => "Group Invitation",
            NotificationKind::AddedToGroup => "Added to Group",
            NotificationKind::RemovedFromGroup => "Removed from Group",
            NotificationKind::SettingsChange => "Settings Changed",
            NotificationKind::PayoutScheduled => "Payout Scheduled",
            NotificationKind::Other => "Notification",
        }
    }
}

/// Group referenced by a group-related notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Sender of a notification (e.g. the inviting member)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SenderRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// One server-pushed notification.
///
/// Notifications are never created client-side; the feed only marks them
/// read, deletes them, or acts on their inline actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<SenderRef>,
    /// Free-form payload attached by some event kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_decodes_to_other() {
        let json = r#"{
            "_id": "n1",
            "type": "brand_new_event",
            "message": "hello",
            "isRead": false,
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::Other);
        assert!(!n.is_read);
    }

    #[test]
    fn group_invite_roundtrip() {
        let json = r#"{
            "_id": "n2",
            "type": "member_change",
            "message": "You were invited",
            "isRead": true,
            "createdAt": "2024-01-01T00:00:00Z",
            "group": { "_id": "g1", "name": "Savings Circle" },
            "sender": { "_id": "u9", "firstName": "Ada", "lastName": "Okafor" }
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::MemberChange);
        assert_eq!(n.group.as_ref().unwrap().name, "Savings Circle");
        assert_eq!(n.sender.as_ref().unwrap().first_name, "Ada");
    }
}
