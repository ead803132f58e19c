//! Event-to-notification routing.
//!
//! [`NotificationRouter`] subscribes to the event bus and, for every like or
//! comment by someone other than the owner, stores a notification for the
//! owner. Unlikes are not reported.

use folio_core::engagement::EngagementTarget;
use folio_core::types::DbId;
use folio_db::models::notification::{CreateNotification, KIND_COMMENT, KIND_LIKE};
use folio_db::repositories::{AchievementRepo, NotificationRepo, ProjectRepo, UserRepo};
use folio_db::DbPool;
use folio_events::bus::{EVENT_COMMENTED, EVENT_LIKED};
use folio_events::PortfolioEvent;
use tokio::sync::broadcast;

pub struct NotificationRouter {
    pool: DbPool,
}

impl NotificationRouter {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run until the event bus is dropped.
    pub async fn run(self, mut receiver: broadcast::Receiver<PortfolioEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Some(id) = self.route_event(&event).await {
                        tracing::debug!(notification_id = id, event_type = %event.event_type, "Notification stored");
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification router lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification router shutting down");
                    break;
                }
            }
        }
    }

    /// Turn one event into an owner notification, if it warrants one.
    pub async fn route_event(&self, event: &PortfolioEvent) -> Option<DbId> {
        let kind = match event.event_type.as_str() {
            EVENT_LIKED => KIND_LIKE,
            EVENT_COMMENTED => KIND_COMMENT,
            _ => return None,
        };
        let target = event.target?;
        let actor_id = event.actor_user_id?;

        let owner = UserRepo::find_admin(&self.pool).await?;
        if owner.id == actor_id {
            return None;
        }
        let actor = UserRepo::find_by_id(&self.pool, actor_id).await?;

        let (noun, title, project_id, achievement_id) = match target {
            EngagementTarget::Project(id) => (
                "project",
                ProjectRepo::find_published(&self.pool, id).await?.title,
                Some(id),
                None,
            ),
            EngagementTarget::Achievement(id) => (
                "achievement",
                AchievementRepo::find_published(&self.pool, id).await?.title,
                None,
                Some(id),
            ),
        };

        let (heading, verb) = if kind == KIND_LIKE {
            ("New like", "liked")
        } else {
            ("New comment", "commented on")
        };

        let id = NotificationRepo::create(
            &self.pool,
            CreateNotification {
                title: heading.to_string(),
                message: format!("{} {verb} the {noun} \"{title}\"", actor.first_name),
                kind,
                user_id: owner.id,
                related_user_id: Some(actor.id),
                project_id,
                achievement_id,
            },
        )
        .await;
        Some(id)
    }
}
