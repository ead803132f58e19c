//! Repository for likes.
//!
//! A visitor holds at most one like per target. The target's denormalised
//! `likes_count` moves with every toggle and never drops below zero.

use folio_core::engagement::{EngagementTarget, LikeOutcome};
use folio_core::error::CoreError;
use folio_core::types::DbId;

use crate::DbPool;

pub struct LikeRepo;

impl LikeRepo {
    /// Add the user's like if absent, remove it if present.
    ///
    /// Fails with `NotFound` when the target does not exist or is unpublished.
    pub async fn toggle(
        pool: &DbPool,
        user_id: DbId,
        target: EngagementTarget,
    ) -> Result<LikeOutcome, CoreError> {
        let mut guard = pool.tables.write().await;
        let tables = &mut *guard;
        let key = (user_id, target);
        let liked = !tables.likes.contains(&key);

        let counter = match target {
            EngagementTarget::Project(id) => tables
                .projects
                .iter_mut()
                .find(|p| p.id == id && p.is_published)
                .map(|p| &mut p.likes_count),
            EngagementTarget::Achievement(id) => tables
                .achievements
                .iter_mut()
                .find(|a| a.id == id && a.is_published)
                .map(|a| &mut a.likes_count),
        }
        .ok_or(CoreError::NotFound {
            entity: target.entity(),
            id: target.id(),
        })?;

        if liked {
            *counter += 1;
        } else {
            *counter = counter.saturating_sub(1);
        }
        let like_count = *counter;

        if liked {
            tables.likes.insert(key);
        } else {
            tables.likes.remove(&key);
        }

        tracing::debug!(user_id, ?target, liked, like_count, "Like toggled");
        Ok(LikeOutcome { liked, like_count })
    }
}
