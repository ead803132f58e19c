//! Repository for achievements.

use std::cmp::Reverse;

use folio_core::authoring::CreateAchievement;
use folio_core::catalog::{filter, Achievement, FilterState};
use folio_core::error::CoreError;
use folio_core::types::DbId;

use crate::{next_id, DbPool};

pub struct AchievementRepo;

impl AchievementRepo {
    /// Published achievements matching `state`, most recently achieved first.
    /// Undated achievements sort last.
    pub async fn list_published(pool: &DbPool, state: &FilterState) -> Vec<Achievement> {
        let tables = pool.tables.read().await;
        let published: Vec<Achievement> = tables
            .achievements
            .iter()
            .filter(|a| a.is_published)
            .cloned()
            .collect();

        let mut found: Vec<Achievement> = filter(&published, state)
            .into_iter()
            .map(|a| Achievement {
                content: None,
                ..tables.resolve_achievement(a)
            })
            .collect();
        found.sort_by_key(|a| Reverse(a.date_achieved));
        found
    }

    pub async fn find_published(pool: &DbPool, id: DbId) -> Option<Achievement> {
        let tables = pool.tables.read().await;
        tables
            .achievements
            .iter()
            .find(|a| a.id == id && a.is_published)
            .map(|a| tables.resolve_achievement(a))
    }

    /// Store a new achievement with zeroed counters.
    pub async fn create(
        pool: &DbPool,
        input: &CreateAchievement,
    ) -> Result<Achievement, CoreError> {
        let mut tables = pool.tables.write().await;
        tables.check_category(input.category_id)?;

        let now = chrono::Utc::now();
        let achievement = Achievement {
            id: next_id(tables.achievements.iter().map(|a| a.id)),
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            content: input.content.clone(),
            image_url: input.image_url.clone(),
            certificate_url: input.certificate_url.clone(),
            date_achieved: input.date_achieved,
            organization: input.organization.clone(),
            is_featured: input.is_featured,
            is_published: input.is_published,
            category_id: input.category_id,
            category: None,
            likes_count: 0,
            comments_count: 0,
            created_at: now,
            updated_at: Some(now),
        };
        tables.achievements.push(achievement.clone());
        Ok(tables.resolve_achievement(&achievement))
    }
}
