//! Repository for projects.

use folio_core::authoring::{clean_technologies, CreateProject, UpdateProject};
use folio_core::catalog::{filter, FilterState, Project};
use folio_core::engagement::EngagementTarget;
use folio_core::error::CoreError;
use folio_core::types::DbId;

use crate::{next_id, DbPool};

pub struct ProjectRepo;

impl ProjectRepo {
    /// Published projects matching `state`, newest first, categories embedded
    /// and long-form content omitted.
    pub async fn list_published(pool: &DbPool, state: &FilterState) -> Vec<Project> {
        let tables = pool.tables.read().await;
        let published: Vec<Project> = tables
            .projects
            .iter()
            .filter(|p| p.is_published)
            .cloned()
            .collect();

        let mut found: Vec<Project> = filter(&published, state)
            .into_iter()
            .map(|p| Project {
                content: None,
                ..tables.resolve_project(p)
            })
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }

    /// A published project with its content, or `None` if it does not exist
    /// or is unpublished.
    pub async fn find_published(pool: &DbPool, id: DbId) -> Option<Project> {
        let tables = pool.tables.read().await;
        tables
            .projects
            .iter()
            .find(|p| p.id == id && p.is_published)
            .map(|p| tables.resolve_project(p))
    }

    /// Like [`find_published`](Self::find_published), counting the read as a
    /// view.
    pub async fn record_view(pool: &DbPool, id: DbId) -> Option<Project> {
        let mut tables = pool.tables.write().await;
        let project = tables
            .projects
            .iter_mut()
            .find(|p| p.id == id && p.is_published)?;
        project.views += 1;
        let project = project.clone();
        Some(tables.resolve_project(&project))
    }

    /// The most recently created projects, published or not.
    pub async fn recent(pool: &DbPool, limit: usize) -> Vec<Project> {
        let tables = pool.tables.read().await;
        let mut all: Vec<&Project> = tables.projects.iter().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all.into_iter()
            .take(limit)
            .map(|p| tables.resolve_project(p))
            .collect()
    }

    /// Store a new project with zeroed counters.
    pub async fn create(pool: &DbPool, input: &CreateProject) -> Result<Project, CoreError> {
        let mut tables = pool.tables.write().await;
        tables.check_category(input.category_id)?;

        let now = chrono::Utc::now();
        let project = Project {
            id: next_id(tables.projects.iter().map(|p| p.id)),
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            content: input.content.clone(),
            image_url: input.image_url.clone(),
            demo_url: input.demo_url.clone(),
            github_url: input.github_url.clone(),
            technologies: clean_technologies(&input.technologies),
            is_featured: input.is_featured,
            is_published: input.is_published,
            category_id: input.category_id,
            category: None,
            likes_count: 0,
            comments_count: 0,
            views: 0,
            created_at: now,
            updated_at: Some(now),
        };
        tables.projects.push(project.clone());
        Ok(tables.resolve_project(&project))
    }

    /// Apply the fields present in `input`.
    ///
    /// Returns `Ok(None)` if no project with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, CoreError> {
        let mut guard = pool.tables.write().await;
        let tables = &mut *guard;
        if input.category_id.is_some() {
            tables.check_category(input.category_id)?;
        }
        let Some(project) = tables.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = &input.title {
            project.title = title.trim().to_string();
        }
        if let Some(description) = &input.description {
            project.description = description.trim().to_string();
        }
        if let Some(content) = &input.content {
            project.content = Some(content.clone());
        }
        if let Some(url) = &input.image_url {
            project.image_url = Some(url.clone());
        }
        if let Some(url) = &input.demo_url {
            project.demo_url = Some(url.clone());
        }
        if let Some(url) = &input.github_url {
            project.github_url = Some(url.clone());
        }
        if let Some(tags) = &input.technologies {
            project.technologies = clean_technologies(tags);
        }
        if let Some(published) = input.is_published {
            project.is_published = published;
        }
        if let Some(featured) = input.is_featured {
            project.is_featured = featured;
        }
        if input.category_id.is_some() {
            project.category_id = input.category_id;
        }
        project.updated_at = Some(chrono::Utc::now());

        let project = project.clone();
        Ok(Some(tables.resolve_project(&project)))
    }

    /// Remove a project with its comments, likes and notifications. Returns
    /// `true` if a project was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> bool {
        let mut tables = pool.tables.write().await;
        let before = tables.projects.len();
        tables.projects.retain(|p| p.id != id);
        if tables.projects.len() == before {
            return false;
        }
        tables.comments.retain(|c| c.project_id != Some(id));
        tables
            .likes
            .retain(|(_, target)| *target != EngagementTarget::Project(id));
        tables.notifications.retain(|n| n.project_id != Some(id));
        true
    }

    /// `(total, published)` project counts.
    pub async fn counts(pool: &DbPool) -> (u64, u64) {
        let tables = pool.tables.read().await;
        let total = tables.projects.len() as u64;
        let published = tables.projects.iter().filter(|p| p.is_published).count() as u64;
        (total, published)
    }
}
