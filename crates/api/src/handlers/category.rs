//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::authoring::CreateCategory;
use folio_core::catalog::Category;
use folio_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await;
    Ok(DataResponse::new(categories))
}

/// POST /api/v1/categories
///
/// Owner only. 409 if the name is taken.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    input.check()?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = admin.user_id, category_id = category.id, "Category created");
    Ok((StatusCode::CREATED, DataResponse::new(category)))
}
