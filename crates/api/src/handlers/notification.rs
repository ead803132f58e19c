//! Handlers for the `/notifications` resource. Owner only.

use axum::extract::{Path, Query, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::notification::Notification;
use folio_db::repositories::NotificationRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    #[serde(default)]
    pub unread_only: bool,
}

/// GET /api/v1/notifications
pub async fn list_notifications(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let notifications =
        NotificationRepo::list_for_user(&state.pool, admin.user_id, params.unread_only).await;
    Ok(DataResponse::new(notifications))
}

/// PUT /api/v1/notifications/{id}/read
///
/// Returns the updated notification, or 404 if it is not the caller's.
pub async fn mark_read(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(notification_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Notification>>> {
    let notification = NotificationRepo::mark_read(&state.pool, notification_id, admin.user_id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id: notification_id,
        }))?;
    Ok(DataResponse::new(notification))
}
