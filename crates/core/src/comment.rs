//! Comment records and the rules every comment body must satisfy.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Longest comment body accepted, in characters.
pub const MAX_COMMENT_LENGTH: u64 = 2000;

/// Who wrote a comment, as shown next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAuthor {
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
    pub initials: String,
}

impl CommentAuthor {
    pub fn new(id: Option<DbId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            initials: initials(&name),
            name,
        }
    }
}

/// A comment on a project or achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: CommentAuthor,
    #[serde(default)]
    pub project_id: Option<DbId>,
    #[serde(default)]
    pub achievement_id: Option<DbId>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub likes: u64,
}

/// Request body for posting a comment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateComment {
    #[validate(length(min = 1, max = MAX_COMMENT_LENGTH))]
    pub content: String,
}

impl CreateComment {
    /// Validate and return the trimmed body.
    pub fn into_body(self) -> Result<String, CoreError> {
        self.validate()?;
        normalize_body(&self.content)
            .ok_or_else(|| CoreError::Validation("Comment content is required".into()))
    }
}

/// Trim a comment body, returning `None` when nothing is left.
pub fn normalize_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Uppercased first letter of every whitespace-separated part of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
