use axum::extract::State;
use axum::Json;
use folio_db::models::stats::PortfolioStats;
use folio_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stats
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<DataResponse<PortfolioStats>>> {
    Ok(DataResponse::new(StatsRepo::portfolio_stats(&state.pool).await))
}
