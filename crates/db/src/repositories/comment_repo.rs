//! Repository for comments.

use folio_core::comment::{normalize_body, Comment, CommentAuthor};
use folio_core::engagement::EngagementTarget;
use folio_core::error::CoreError;
use folio_core::user::User;

use crate::DbPool;

pub struct CommentRepo;

impl CommentRepo {
    /// Comments on `target`, newest first.
    pub async fn list_for(pool: &DbPool, target: EngagementTarget) -> Vec<Comment> {
        let tables = pool.tables.read().await;
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| comment_target(c) == Some(target))
            .cloned()
            .collect();
        comments.reverse();
        comments
    }

    /// Store a comment by `author` on a published `target` and bump the
    /// target's `comments_count`.
    pub async fn create(
        pool: &DbPool,
        target: EngagementTarget,
        author: &User,
        body: &str,
    ) -> Result<Comment, CoreError> {
        let content = normalize_body(body)
            .ok_or_else(|| CoreError::Validation("Comment content is required".into()))?;

        let mut guard = pool.tables.write().await;
        let tables = &mut *guard;

        let counter = match target {
            EngagementTarget::Project(id) => tables
                .projects
                .iter_mut()
                .find(|p| p.id == id && p.is_published)
                .map(|p| &mut p.comments_count),
            EngagementTarget::Achievement(id) => tables
                .achievements
                .iter_mut()
                .find(|a| a.id == id && a.is_published)
                .map(|a| &mut a.comments_count),
        }
        .ok_or(CoreError::NotFound {
            entity: target.entity(),
            id: target.id(),
        })?;
        *counter += 1;

        tables.next_comment_id += 1;
        let (project_id, achievement_id) = match target {
            EngagementTarget::Project(id) => (Some(id), None),
            EngagementTarget::Achievement(id) => (None, Some(id)),
        };
        let comment = Comment {
            id: tables.next_comment_id.to_string(),
            content,
            author: CommentAuthor::new(Some(author.id), author.display_name()),
            project_id,
            achievement_id,
            created_at: chrono::Utc::now(),
            likes: 0,
        };
        tables.comments.push(comment.clone());

        tracing::debug!(comment_id = %comment.id, ?target, author_id = author.id, "Comment stored");
        Ok(comment)
    }

    /// The most recent comments across all targets.
    pub async fn recent(pool: &DbPool, limit: usize) -> Vec<Comment> {
        let tables = pool.tables.read().await;
        tables.comments.iter().rev().take(limit).cloned().collect()
    }
}

fn comment_target(comment: &Comment) -> Option<EngagementTarget> {
    match (comment.project_id, comment.achievement_id) {
        (Some(id), _) => Some(EngagementTarget::Project(id)),
        (None, Some(id)) => Some(EngagementTarget::Achievement(id)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use folio_core::fixtures;

    use super::*;
    use crate::repositories::ProjectRepo;
    use crate::seeded_pool;

    fn visitor() -> User {
        fixtures::users().remove(1)
    }

    #[tokio::test]
    async fn newest_first_and_counter_bumped() {
        let pool = seeded_pool();
        let target = EngagementTarget::Project(2);
        CommentRepo::create(&pool, target, &visitor(), "first").await.unwrap();
        CommentRepo::create(&pool, target, &visitor(), "  second ").await.unwrap();

        let comments = CommentRepo::list_for(&pool, target).await;
        let bodies: Vec<_> = comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(bodies, vec!["second", "first"]);
        assert_eq!(comments[0].author.initials, "AL");

        let project = ProjectRepo::find_published(&pool, 2).await.unwrap();
        assert_eq!(project.comments_count, 7);
    }

    #[tokio::test]
    async fn comments_are_scoped_to_their_target() {
        let pool = seeded_pool();
        CommentRepo::create(&pool, EngagementTarget::Project(1), &visitor(), "p")
            .await
            .unwrap();
        CommentRepo::create(&pool, EngagementTarget::Achievement(1), &visitor(), "a")
            .await
            .unwrap();

        assert_eq!(CommentRepo::list_for(&pool, EngagementTarget::Project(1)).await.len(), 1);
        assert_eq!(CommentRepo::recent(&pool, 5).await.len(), 2);
    }

    #[tokio::test]
    async fn blank_body_is_rejected_without_side_effects() {
        let pool = seeded_pool();
        let result = CommentRepo::create(&pool, EngagementTarget::Project(1), &visitor(), " ").await;
        assert_matches!(result, Err(CoreError::Validation(_)));
        assert!(CommentRepo::recent(&pool, 5).await.is_empty());
    }
}
