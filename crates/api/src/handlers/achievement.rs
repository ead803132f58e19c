//! Handlers for the `/achievements` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::authoring::CreateAchievement;
use folio_core::catalog::Achievement;
use folio_core::error::CoreError;
use folio_core::pagination::Page;
use folio_core::types::DbId;
use folio_db::repositories::AchievementRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/achievements
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Page<Achievement>>>> {
    let (page, per_page) = params.page();
    let achievements = AchievementRepo::list_published(&state.pool, &params.filter_state()).await;
    Ok(DataResponse::new(Page::from_vec(achievements, page, per_page)))
}

/// GET /api/v1/achievements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Achievement>>> {
    let achievement = AchievementRepo::find_published(&state.pool, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Achievement",
            id,
        }))?;
    Ok(DataResponse::new(achievement))
}

/// POST /api/v1/achievements
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAchievement>,
) -> AppResult<(StatusCode, Json<DataResponse<Achievement>>)> {
    input.check()?;
    let achievement = AchievementRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = admin.user_id,
        achievement_id = achievement.id,
        "Achievement created"
    );
    Ok((StatusCode::CREATED, DataResponse::new(achievement)))
}
