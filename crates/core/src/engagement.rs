//! Wire types shared by the like endpoints and the client engagement store.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// What a like toggle resolved to on the server.
///
/// Older servers spell the counter `likes_count`; both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeOutcome {
    pub liked: bool,
    #[serde(alias = "likes_count")]
    pub like_count: u64,
}

/// The thing a like or comment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EngagementTarget {
    Project(DbId),
    Achievement(DbId),
}

impl EngagementTarget {
    pub fn entity(self) -> &'static str {
        match self {
            EngagementTarget::Project(_) => "Project",
            EngagementTarget::Achievement(_) => "Achievement",
        }
    }

    pub fn id(self) -> DbId {
        match self {
            EngagementTarget::Project(id) | EngagementTarget::Achievement(id) => id,
        }
    }
}
