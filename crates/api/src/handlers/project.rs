//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::authoring::{CreateProject, UpdateProject};
use folio_core::catalog::Project;
use folio_core::error::CoreError;
use folio_core::pagination::Page;
use folio_core::types::DbId;
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects
///
/// Published projects, newest first, filtered and paginated.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Page<Project>>>> {
    let (page, per_page) = params.page();
    let projects = ProjectRepo::list_published(&state.pool, &params.filter_state()).await;
    Ok(DataResponse::new(Page::from_vec(projects, page, per_page)))
}

/// GET /api/v1/projects/{id}
///
/// Counts as a view.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::record_view(&state.pool, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(DataResponse::new(project))
}

/// POST /api/v1/projects
///
/// Owner only. Unpublished unless `is_published` is set.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    input.check()?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = admin.user_id, project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, DataResponse::new(project)))
}

/// PUT /api/v1/projects/{id}
///
/// Owner only. Works on unpublished projects too.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    input.check()?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(user_id = admin.user_id, project_id = id, "Project updated");
    Ok(DataResponse::new(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Owner only. Comments and likes on the project go with it.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProjectRepo::delete(&state.pool, id).await {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }
    tracing::info!(user_id = admin.user_id, project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
