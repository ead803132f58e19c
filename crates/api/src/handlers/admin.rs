//! Owner dashboard.

use axum::extract::State;
use axum::Json;
use folio_db::models::stats::DashboardSummary;
use folio_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/dashboard
pub async fn dashboard(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    tracing::debug!(user_id = admin.user_id, "Dashboard requested");
    Ok(DataResponse::new(StatsRepo::dashboard(&state.pool, admin.user_id).await))
}
