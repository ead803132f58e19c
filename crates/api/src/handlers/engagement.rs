//! Likes and comments.
//!
//! Every successful mutation publishes a [`PortfolioEvent`] so the
//! notification router can tell the portfolio owner about it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::comment::{Comment, CreateComment};
use folio_core::engagement::{EngagementTarget, LikeOutcome};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::repositories::{CommentRepo, LikeRepo, ProjectRepo, UserRepo};
use folio_events::bus::{EVENT_COMMENTED, EVENT_LIKED, EVENT_UNLIKED};
use folio_events::PortfolioEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects/{id}/like
pub async fn toggle_project_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<LikeOutcome>>> {
    toggle_like(&state, &auth, EngagementTarget::Project(id)).await
}

/// POST /api/v1/achievements/{id}/like
pub async fn toggle_achievement_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<LikeOutcome>>> {
    toggle_like(&state, &auth, EngagementTarget::Achievement(id)).await
}

async fn toggle_like(
    state: &AppState,
    auth: &AuthUser,
    target: EngagementTarget,
) -> AppResult<Json<DataResponse<LikeOutcome>>> {
    let outcome = LikeRepo::toggle(&state.pool, auth.user_id, target).await?;

    let event_type = if outcome.liked {
        EVENT_LIKED
    } else {
        EVENT_UNLIKED
    };
    state.event_bus.publish(
        PortfolioEvent::new(event_type)
            .with_target(target)
            .with_actor(auth.user_id)
            .with_payload(serde_json::json!({ "like_count": outcome.like_count })),
    );

    tracing::info!(user_id = auth.user_id, ?target, liked = outcome.liked, "Like toggled");
    Ok(DataResponse::new(outcome))
}

/// GET /api/v1/projects/{id}/comments
///
/// Newest first. 404 for unknown or unpublished projects.
pub async fn list_project_comments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Comment>>>> {
    ProjectRepo::find_published(&state.pool, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let comments = CommentRepo::list_for(&state.pool, EngagementTarget::Project(id)).await;
    Ok(DataResponse::new(comments))
}

/// POST /api/v1/projects/{id}/comments
pub async fn create_project_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    let body = input.into_body()?;

    let author = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown user".into())))?;

    let target = EngagementTarget::Project(id);
    let comment = CommentRepo::create(&state.pool, target, &author, &body).await?;

    state.event_bus.publish(
        PortfolioEvent::new(EVENT_COMMENTED)
            .with_target(target)
            .with_actor(author.id)
            .with_payload(serde_json::json!({ "comment_id": comment.id })),
    );

    tracing::info!(user_id = author.id, project_id = id, comment_id = %comment.id, "Comment created");
    Ok((StatusCode::CREATED, DataResponse::new(comment)))
}
