use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheap to clone: everything inside is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory tables.
    pub pool: folio_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Engagement events (likes, comments) are published here.
    pub event_bus: Arc<folio_events::EventBus>,
}
