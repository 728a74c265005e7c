//! # Notification Store
//!
//! Server-pushed notification feed. Notifications are never created locally;
//! the store fetches, marks read (per item or all), deletes, and performs the
//! type-specific inline actions (group invitation responses).
//!
//! The unread count is always derived from the collection, never stored, so
//! it cannot drift from the items themselves.

use std::sync::Arc;

use futures::future::join_all;
use parking_lot::RwLock;
use shared::Notification;

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// Response to a group invitation carried by a `member_change` notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteResponse {
    Accept,
    Decline,
}

/// Notification state slice
#[derive(Debug, Clone, Default)]
pub struct NotificationSlice {
    pub notifications: Vec<Notification>,
    pub loading: bool,
    pub error: Option<String>,
    pub(crate) generation: u64,
}

/// Notification state container
pub struct NotificationStore {
    api: Arc<dyn ApiService>,
    slice: Arc<RwLock<NotificationSlice>>,
}

impl NotificationStore {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            slice: Arc::new(RwLock::new(NotificationSlice::default())),
        }
    }

    pub fn snapshot(&self) -> NotificationSlice {
        self.slice.read().clone()
    }

    /// Count of unread items, derived on every call.
    pub fn unread_count(&self) -> usize {
        self.slice
            .read()
            .notifications
            .iter()
            .filter(|n| !n.is_read)
            .count()
    }

    /// Fetch the feed. On failure the collection is reset to empty in
    /// addition to recording the error (the feed's data-loss-on-error
    /// policy: never render a stale feed alongside an error banner).
    pub async fn fetch(&self) -> Result<()> {
        let generation = self.begin();
        let result = self.api.fetch_notifications().await;

        let mut slice = self.slice.write();
        if slice.generation != generation {
            tracing::debug!("Notification fetch superseded by reset; dropping response");
            return Ok(());
        }
        slice.loading = false;
        match result {
            Ok(notifications) => {
                slice.notifications = notifications;
                Ok(())
            }
            Err(message) => {
                slice.notifications.clear();
                slice.error = Some(message.clone());
                Err(AppError::Api(message))
            }
        }
    }

    /// Mark one notification as read; patches the matching item locally on
    /// success and leaves state untouched on failure.
    pub async fn mark_read(&self, id: &str) -> Result<()> {
        self.api.mark_notification_read(id).await?;

        let mut slice = self.slice.write();
        if let Some(item) = slice.notifications.iter_mut().find(|n| n.id == id) {
            item.is_read = true;
        }
        Ok(())
    }

    /// Open a notification. If it is unread this issues exactly one
    /// mark-as-read call, then refetches the feed to reconcile with the
    /// server. Returns the opened notification.
    pub async fn open(&self, id: &str) -> Result<Notification> {
        let target = self
            .slice
            .read()
            .notifications
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| AppError::State(format!("Unknown notification: {}", id)))?;

        if !target.is_read {
            self.api.mark_notification_read(id).await?;
            self.fetch().await?;
        }

        Ok(target)
    }

    /// Mark every unread notification as read: N per-item calls issued
    /// concurrently, then one refetch. The observable result is zero unread.
    pub async fn mark_all_read(&self) -> Result<()> {
        let unread_ids: Vec<String> = self
            .slice
            .read()
            .notifications
            .iter()
            .filter(|n| !n.is_read)
            .map(|n| n.id.clone())
            .collect();

        if unread_ids.is_empty() {
            return Ok(());
        }

        let calls = unread_ids
            .iter()
            .map(|id| self.api.mark_notification_read(id));
        let results = join_all(calls).await;

        // Reconcile with the server regardless of individual failures, then
        // surface the first failure if any.
        self.fetch().await?;

        for result in results {
            result?;
        }
        Ok(())
    }

    /// Delete one notification; removes it locally on success.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.delete_notification(id).await?;

        let mut slice = self.slice.write();
        slice.notifications.retain(|n| n.id != id);
        Ok(())
    }

    /// Respond to a group invitation notification. Requires the group and
    /// sender sub-objects; refetches the feed afterwards so the invitation's
    /// state reflects the server.
    pub async fn respond_group_invite(&self, id: &str, response: InviteResponse) -> Result<()> {
        let notification = self
            .slice
            .read()
            .notifications
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| AppError::State(format!("Unknown notification: {}", id)))?;

        let group = notification
            .group
            .ok_or_else(|| AppError::State("Notification has no group attached".into()))?;
        let sender = notification
            .sender
            .ok_or_else(|| AppError::State("Notification has no sender attached".into()))?;

        match response {
            InviteResponse::Accept => self.api.accept_group_invite(&group.id, &sender.id).await?,
            InviteResponse::Decline => self.api.decline_group_invite(&group.id, &sender.id).await?,
        }

        self.fetch().await
    }

    /// Reset to the initial empty slice; used on logout or unmount.
    pub fn reset(&self) {
        let mut slice = self.slice.write();
        let generation = slice.generation + 1;
        *slice = NotificationSlice {
            generation,
            ..NotificationSlice::default()
        };
    }

    fn begin(&self) -> u64 {
        let mut slice = self.slice.write();
        slice.loading = true;
        slice.error = None;
        slice.generation
    }
}
