//! Repository for notifications.

use folio_core::types::DbId;

use crate::models::notification::{CreateNotification, Notification};
use crate::DbPool;

pub struct NotificationRepo;

impl NotificationRepo {
    /// Store a notification, returning its id.
    pub async fn create(pool: &DbPool, input: CreateNotification) -> DbId {
        let mut tables = pool.tables.write().await;
        tables.next_notification_id += 1;
        let id = tables.next_notification_id;
        tables.notifications.push(Notification {
            id,
            title: input.title,
            message: input.message,
            kind: input.kind.to_string(),
            is_read: false,
            user_id: input.user_id,
            related_user_id: input.related_user_id,
            project_id: input.project_id,
            achievement_id: input.achievement_id,
            created_at: chrono::Utc::now(),
        });
        id
    }

    /// A user's notifications, newest first.
    pub async fn list_for_user(pool: &DbPool, user_id: DbId, unread_only: bool) -> Vec<Notification> {
        let tables = pool.tables.read().await;
        tables
            .notifications
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id && (!unread_only || !n.is_read))
            .cloned()
            .collect()
    }

    /// Mark one of the user's notifications read and return it.
    ///
    /// Returns `None` when no notification with that id belongs to the user.
    pub async fn mark_read(
        pool: &DbPool,
        notification_id: DbId,
        user_id: DbId,
    ) -> Option<Notification> {
        let mut tables = pool.tables.write().await;
        let notification = tables
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id && n.user_id == user_id)?;
        notification.is_read = true;
        Some(notification.clone())
    }

    pub async fn unread_count(pool: &DbPool, user_id: DbId) -> u64 {
        let tables = pool.tables.read().await;
        tables
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .count() as u64
    }
}
