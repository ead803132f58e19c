//! Notification model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

pub const KIND_COMMENT: &str = "comment";
pub const KIND_LIKE: &str = "like";

/// A message for the portfolio owner about visitor activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: DbId,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    /// Recipient.
    pub user_id: DbId,
    /// The visitor whose action raised it.
    pub related_user_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub achievement_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a notification.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub title: String,
    pub message: String,
    pub kind: &'static str,
    pub user_id: DbId,
    pub related_user_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub achievement_id: Option<DbId>,
}
