//! Aggregate views over the tables.

use folio_core::catalog::Project;
use folio_core::comment::Comment;
use serde::Serialize;

/// Public portfolio totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioStats {
    pub total_projects: u64,
    pub total_achievements: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_users: u64,
}

/// What the admin dashboard shows.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_projects: u64,
    pub published_projects: u64,
    pub total_users: u64,
    pub total_comments: u64,
    /// Unread notifications for the owner viewing the dashboard.
    pub unread_notifications: u64,
    pub recent_projects: Vec<Project>,
    pub recent_comments: Vec<Comment>,
}
