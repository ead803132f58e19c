//! Portfolio content, visitor engagement and the owner's catalog writes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{achievement, category, engagement, project, stats};
use crate::state::AppState;

/// ```text
/// GET    /categories                 -> category::list
/// POST   /categories                 -> category::create (admin)
/// GET    /projects                   -> project::list
/// POST   /projects                   -> project::create (admin)
/// GET    /projects/{id}              -> project::get_by_id
/// PUT    /projects/{id}              -> project::update (admin)
/// DELETE /projects/{id}              -> project::delete (admin)
/// GET    /projects/{id}/comments     -> engagement::list_project_comments
/// POST   /projects/{id}/comments     -> engagement::create_project_comment
/// POST   /projects/{id}/like         -> engagement::toggle_project_like
/// GET    /achievements               -> achievement::list
/// POST   /achievements               -> achievement::create (admin)
/// GET    /achievements/{id}          -> achievement::get_by_id
/// POST   /achievements/{id}/like     -> engagement::toggle_achievement_like
/// GET    /stats                      -> stats::get_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list).post(category::create))
        .route("/projects", get(project::list).post(project::create))
        .route(
            "/projects/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route(
            "/projects/{id}/comments",
            get(engagement::list_project_comments).post(engagement::create_project_comment),
        )
        .route("/projects/{id}/like", post(engagement::toggle_project_like))
        .route("/achievements", get(achievement::list).post(achievement::create))
        .route("/achievements/{id}", get(achievement::get_by_id))
        .route(
            "/achievements/{id}/like",
            post(engagement::toggle_achievement_like),
        )
        .route("/stats", get(stats::get_stats))
}
