//! In-memory storage for the portfolio.
//!
//! Records live for the lifetime of the process. Repositories are unit
//! structs whose associated functions take the shared [`DbPool`], so handlers
//! read the same way they would against a SQL pool.

use std::collections::HashSet;
use std::sync::Arc;

use folio_core::catalog::{Achievement, Category, Project};
use folio_core::comment::Comment;
use folio_core::engagement::EngagementTarget;
use folio_core::error::CoreError;
use folio_core::fixtures;
use folio_core::types::DbId;
use folio_core::user::User;
use tokio::sync::RwLock;

pub mod models;
pub mod repositories;

use models::notification::Notification;

/// Shared handle to the in-memory tables.
pub type DbPool = Arc<Database>;

/// All tables, behind one lock.
///
/// Every repository call takes the lock once and never holds it across an
/// await, so each call is atomic with respect to the others.
#[derive(Debug, Default)]
pub struct Database {
    pub(crate) tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub comments: Vec<Comment>,
    pub likes: HashSet<(DbId, EngagementTarget)>,
    pub notifications: Vec<Notification>,
    /// Last id handed out; ids start at 1.
    pub next_comment_id: DbId,
    pub next_notification_id: DbId,
}

impl Tables {
    fn category(&self, id: Option<DbId>) -> Option<Category> {
        let id = id?;
        self.categories.iter().find(|c| c.id == id).cloned()
    }

    /// Reject references to categories that do not exist.
    pub(crate) fn check_category(&self, id: Option<DbId>) -> Result<(), CoreError> {
        match id {
            Some(id) if !self.categories.iter().any(|c| c.id == id) => Err(
                CoreError::Validation(format!("Category {id} does not exist")),
            ),
            _ => Ok(()),
        }
    }

    /// A copy of `project` with its category embedded.
    pub(crate) fn resolve_project(&self, project: &Project) -> Project {
        Project {
            category: self.category(project.category_id),
            ..project.clone()
        }
    }

    pub(crate) fn resolve_achievement(&self, achievement: &Achievement) -> Achievement {
        Achievement {
            category: self.category(achievement.category_id),
            ..achievement.clone()
        }
    }
}

/// One past the largest id in `ids`; ids start at 1.
pub(crate) fn next_id(ids: impl Iterator<Item = DbId>) -> DbId {
    ids.max().unwrap_or(0) + 1
}

/// Create an empty database.
pub fn create_pool() -> DbPool {
    Arc::new(Database::default())
}

/// Create a database holding the demo fixtures.
pub fn seeded_pool() -> DbPool {
    let tables = Tables {
        users: fixtures::users(),
        categories: fixtures::categories(),
        projects: fixtures::projects(),
        achievements: fixtures::achievements(),
        ..Tables::default()
    };
    tracing::debug!(
        projects = tables.projects.len(),
        categories = tables.categories.len(),
        achievements = tables.achievements.len(),
        users = tables.users.len(),
        "Seeded in-memory database"
    );
    Arc::new(Database {
        tables: RwLock::new(tables),
    })
}

/// Confirm the tables are reachable (the lock is not wedged).
pub async fn health_check(pool: &DbPool) -> bool {
    let _tables = pool.tables.read().await;
    true
}
