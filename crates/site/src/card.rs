//! Everything one project card displays, derived from the project, its
//! category and the session's engagement.

use std::sync::LazyLock;

use folio_core::catalog::{Category, Project, DEFAULT_CATEGORY_COLOR};
use folio_core::comment::Comment;
use folio_core::types::DbId;
use reqwest::Url;

use crate::engagement::EngagementState;

/// Technology tags shown before collapsing the rest into a count.
pub const MAX_VISIBLE_TAGS: usize = 4;

const LINKEDIN_SHARE_ENDPOINT: &str = "https://www.linkedin.com/sharing/share-offsite/";

static LINKEDIN_SHARE: LazyLock<Url> =
    LazyLock::new(|| Url::parse(LINKEDIN_SHARE_ENDPOINT).expect("share endpoint is a valid URL"));

/// Where a project can be shared to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    /// `{base}#project-{id}`.
    pub permalink: String,
    pub linkedin: String,
}

impl ShareLinks {
    pub fn for_project(project: &Project, base: &Url) -> Self {
        let mut permalink = base.clone();
        permalink.set_fragment(Some(&format!("project-{}", project.id)));

        let mut linkedin = LINKEDIN_SHARE.clone();
        linkedin
            .query_pairs_mut()
            .append_pair("url", permalink.as_str())
            .append_pair("title", &format!("Check out this project: {}", project.title));

        Self {
            permalink: permalink.into(),
            linkedin: linkedin.into(),
        }
    }
}

/// Per-card UI state the controller keeps outside the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardUi<'a> {
    pub comments_open: bool,
    pub draft: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCardView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Shown in place of the image.
    pub placeholder: Option<char>,
    pub featured: bool,
    pub category_name: Option<String>,
    pub category_color: String,
    pub tags: Vec<String>,
    pub hidden_tag_count: usize,
    /// `dd/mm/yyyy`.
    pub created_on: String,
    pub liked: bool,
    pub like_count: u64,
    pub like_pending: bool,
    pub comment_count: u64,
    pub view_count: u64,
    pub demo_url: Option<String>,
    pub source_url: Option<String>,
    pub comments_open: bool,
    pub comments: Vec<Comment>,
    pub draft: String,
    pub submitting_comment: bool,
    pub can_submit_comment: bool,
}

impl ProjectCardView {
    pub fn new(
        project: &Project,
        categories: &[Category],
        engagement: Option<&EngagementState>,
        ui: CardUi<'_>,
    ) -> Self {
        let category = project.category.as_ref().or_else(|| {
            project
                .category_id
                .and_then(|id| categories.iter().find(|c| c.id == id))
        });

        let (liked, like_count, like_pending, comments, submitting) = match engagement {
            Some(e) => (
                e.liked,
                e.like_count,
                e.like_pending,
                e.comments.clone(),
                e.submitting_comment,
            ),
            None => (false, project.likes_count, false, Vec::new(), false),
        };
        let comment_count = if comments.is_empty() {
            project.comments_count
        } else {
            comments.len() as u64
        };

        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone(),
            placeholder: match project.image_url {
                Some(_) => None,
                None => project.title.chars().next(),
            },
            featured: project.is_featured,
            category_name: category.map(|c| c.name.clone()),
            category_color: category
                .map(|c| c.color.clone())
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            tags: project
                .technologies
                .iter()
                .take(MAX_VISIBLE_TAGS)
                .cloned()
                .collect(),
            hidden_tag_count: project.technologies.len().saturating_sub(MAX_VISIBLE_TAGS),
            created_on: project.created_at.format("%d/%m/%Y").to_string(),
            liked,
            like_count,
            like_pending,
            comment_count,
            view_count: project.views,
            demo_url: project.demo_url.clone(),
            source_url: project.github_url.clone(),
            comments_open: ui.comments_open,
            comments,
            draft: ui.draft.to_string(),
            submitting_comment: submitting,
            can_submit_comment: !submitting && !ui.draft.trim().is_empty(),
        }
    }
}
