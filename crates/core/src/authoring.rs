//! Owner-submitted catalog content: request bodies for creating and editing
//! categories, projects and achievements.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Longest category name accepted.
pub const MAX_CATEGORY_NAME_LENGTH: u64 = 50;

/// Longest project or achievement title accepted.
pub const MAX_TITLE_LENGTH: u64 = 200;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = MAX_CATEGORY_NAME_LENGTH))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `#rrggbb`. Defaults to [`DEFAULT_CATEGORY_COLOR`](crate::catalog::DEFAULT_CATEGORY_COLOR).
    #[serde(default)]
    pub color: Option<String>,
}

impl CreateCategory {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("Category name is required".into()));
        }
        match &self.color {
            Some(color) if !is_hex_color(color) => Err(CoreError::Validation(format!(
                "Color must look like #rrggbb, got {color:?}"
            ))),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// New projects stay hidden until published.
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub category_id: Option<DbId>,
}

impl CreateProject {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;
        require_text("title", &self.title)?;
        require_text("description", &self.description)
    }
}

/// Partial update of a project. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub category_id: Option<DbId>,
}

impl UpdateProject {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(description) = &self.description {
            require_text("description", description)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAchievement {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub certificate_url: Option<String>,
    #[serde(default)]
    pub date_achieved: Option<NaiveDate>,
    #[validate(length(max = MAX_TITLE_LENGTH))]
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub category_id: Option<DbId>,
}

impl CreateAchievement {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;
        require_text("title", &self.title)?;
        require_text("description", &self.description)
    }
}

/// Trimmed technology tags with blanks dropped, in submitted order.
pub fn clean_technologies(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
