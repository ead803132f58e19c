//! Aggregates for the public stats endpoint and the admin dashboard.

use folio_core::types::DbId;

use crate::models::stats::{DashboardSummary, PortfolioStats};
use crate::repositories::{CommentRepo, NotificationRepo, ProjectRepo};
use crate::DbPool;

/// How many recent items the dashboard lists.
const DASHBOARD_RECENT: usize = 5;

pub struct StatsRepo;

impl StatsRepo {
    /// Totals over published content. Likes and comments are summed from the
    /// denormalised counters so they agree with what the cards display.
    pub async fn portfolio_stats(pool: &DbPool) -> PortfolioStats {
        let tables = pool.tables.read().await;
        let projects = tables.projects.iter().filter(|p| p.is_published);
        let achievements = tables.achievements.iter().filter(|a| a.is_published);

        let (mut total_likes, mut total_comments, mut total_projects) = (0, 0, 0);
        for p in projects {
            total_projects += 1;
            total_likes += p.likes_count;
            total_comments += p.comments_count;
        }
        let mut total_achievements = 0;
        for a in achievements {
            total_achievements += 1;
            total_likes += a.likes_count;
            total_comments += a.comments_count;
        }

        PortfolioStats {
            total_projects,
            total_achievements,
            total_likes,
            total_comments,
            total_users: tables.users.iter().filter(|u| u.is_active).count() as u64,
        }
    }

    /// Dashboard for `owner_id`.
    pub async fn dashboard(pool: &DbPool, owner_id: DbId) -> DashboardSummary {
        let stats = Self::portfolio_stats(pool).await;
        let (total_projects, published_projects) = ProjectRepo::counts(pool).await;

        DashboardSummary {
            total_projects,
            published_projects,
            total_users: stats.total_users,
            total_comments: stats.total_comments,
            unread_notifications: NotificationRepo::unread_count(pool, owner_id).await,
            recent_projects: ProjectRepo::recent(pool, DASHBOARD_RECENT).await,
            recent_comments: CommentRepo::recent(pool, DASHBOARD_RECENT).await,
        }
    }
}
