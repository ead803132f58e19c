pub mod admin;
pub mod health;
pub mod notification;
pub mod portfolio;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /categories                         list, create (admin)
/// /projects                           list (page, per_page, category_id, featured, search), create (admin)
/// /projects/{id}                      get (counts a view), update, delete (admin)
/// /projects/{id}/comments             list, create (auth)
/// /projects/{id}/like                 toggle (auth)
/// /achievements                       list, create (admin)
/// /achievements/{id}                  get
/// /achievements/{id}/like             toggle (auth)
/// /stats                              public totals
///
/// /notifications                      list (admin)
/// /notifications/{id}/read            mark read (admin)
///
/// /admin/dashboard                    summary (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(portfolio::router())
        .nest("/notifications", notification::router())
        .nest("/admin", admin::router())
}
