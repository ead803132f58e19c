//! The projects section: catalog, filter bar, cards and their engagement.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use folio_core::catalog::{
    filter, Category, CategorySelection, FilterState, InvalidCategorySelection, Project,
};
use folio_core::comment::Comment;
use folio_core::engagement::LikeOutcome;
use folio_core::types::DbId;
use folio_core::user::CurrentUser;
use reqwest::Url;

use crate::backend::{EngagementBackend, HttpEngagementBackend, MockEngagementBackend};
use crate::card::{CardUi, ProjectCardView, ShareLinks};
use crate::config::SiteConfig;
use crate::engagement::{EngagementError, EngagementStore};
use crate::source::{CatalogSource, FixtureCatalog, HttpCatalog, SourceError};

/// Catalog loading progress. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

pub struct ProjectsSection {
    source: Arc<dyn CatalogSource>,
    store: EngagementStore,
    share_base: Url,
    load_state: LoadState,
    categories: Vec<Category>,
    projects: Vec<Project>,
    filter: FilterState,
    view_mode: ViewMode,
    drafts: HashMap<DbId, String>,
    open_comments: HashSet<DbId>,
}

impl ProjectsSection {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        backend: Arc<dyn EngagementBackend>,
        share_base: Url,
    ) -> Self {
        Self {
            source,
            store: EngagementStore::new(backend),
            share_base,
            load_state: LoadState::NotLoaded,
            categories: Vec::new(),
            projects: Vec::new(),
            filter: FilterState::default(),
            view_mode: ViewMode::default(),
            drafts: HashMap::new(),
            open_comments: HashSet::new(),
        }
    }

    /// Wire the section to the API when `api_url` is configured, otherwise to
    /// the demo content and the simulated backend.
    pub fn from_config(config: &SiteConfig) -> Self {
        let (source, backend): (Arc<dyn CatalogSource>, Arc<dyn EngagementBackend>) =
            match &config.api_url {
                Some(url) => (
                    Arc::new(HttpCatalog::new(url.clone())),
                    Arc::new(HttpEngagementBackend::new(url.clone())),
                ),
                None => (
                    Arc::new(FixtureCatalog::new(config.load_latency)),
                    Arc::new(
                        MockEngagementBackend::seeded(&folio_core::fixtures::projects())
                            .with_comment_latency(config.comment_latency),
                    ),
                ),
            };
        Self::new(source, backend, config.share_base_url.clone())
    }

    /// Fetch the catalog once. Later calls are no-ops. A failed fetch leaves
    /// the section unloaded so it can be retried.
    pub async fn load(&mut self) -> Result<(), SourceError> {
        if self.load_state != LoadState::NotLoaded {
            return Ok(());
        }
        self.load_state = LoadState::Loading;

        match self.source.load().await {
            Ok(catalog) => {
                for p in &catalog.projects {
                    self.store.register(p.id, p.likes_count);
                }
                self.categories = catalog.categories;
                self.projects = catalog.projects;
                self.load_state = LoadState::Loaded;
                tracing::info!(projects = self.projects.len(), "Projects section loaded");
                Ok(())
            }
            Err(e) => {
                self.load_state = LoadState::NotLoaded;
                tracing::warn!(error = %e, "Failed to load projects");
                Err(e)
            }
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn store(&self) -> &EngagementStore {
        &self.store
    }

    // ---- filter bar ----

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search = text.into();
    }

    pub fn set_category(&mut self, category: CategorySelection) {
        self.filter.category = category;
    }

    /// Set the category from a dropdown value: `"all"` or a category id.
    pub fn select_category(&mut self, value: &str) -> Result<(), InvalidCategorySelection> {
        self.filter.category = value.parse()?;
        Ok(())
    }

    pub fn toggle_featured_only(&mut self) -> bool {
        self.filter.featured_only = !self.filter.featured_only;
        self.filter.featured_only
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Projects passing the current filter, in catalog order. `None` until
    /// the catalog has loaded, so an empty match is never confused with
    /// "still loading".
    pub fn visible_projects(&self) -> Option<Vec<&Project>> {
        (self.load_state == LoadState::Loaded).then(|| filter(&self.projects, &self.filter))
    }

    pub fn cards(&self) -> Option<Vec<ProjectCardView>> {
        let visible = self.visible_projects()?;
        Some(
            visible
                .into_iter()
                .map(|p| {
                    let ui = CardUi {
                        comments_open: self.open_comments.contains(&p.id),
                        draft: self.drafts.get(&p.id).map(String::as_str).unwrap_or(""),
                    };
                    ProjectCardView::new(p, &self.categories, self.store.state(p.id).as_ref(), ui)
                })
                .collect(),
        )
    }

    // ---- card actions ----

    pub async fn like(
        &self,
        project_id: DbId,
        user: Option<&CurrentUser>,
    ) -> Result<LikeOutcome, EngagementError> {
        self.store.toggle_like(project_id, user).await
    }

    pub fn set_draft(&mut self, project_id: DbId, text: impl Into<String>) {
        self.drafts.insert(project_id, text.into());
    }

    pub fn draft(&self, project_id: DbId) -> &str {
        self.drafts.get(&project_id).map(String::as_str).unwrap_or("")
    }

    /// Send the project's draft as a comment. The draft is cleared only when
    /// the comment was accepted.
    pub async fn submit_comment(
        &mut self,
        project_id: DbId,
        user: Option<&CurrentUser>,
    ) -> Result<Comment, EngagementError> {
        let body = self.draft(project_id).to_string();
        let comment = self.store.add_comment(project_id, user, &body).await?;
        self.drafts.remove(&project_id);
        Ok(comment)
    }

    /// Open or close the comment panel. Returns whether it is now open.
    pub fn toggle_comments(&mut self, project_id: DbId) -> bool {
        if self.open_comments.remove(&project_id) {
            false
        } else {
            self.open_comments.insert(project_id);
            true
        }
    }

    pub fn share(&self, project_id: DbId) -> Option<ShareLinks> {
        self.projects
            .iter()
            .find(|p| p.id == project_id)
            .map(|p| ShareLinks::for_project(p, &self.share_base))
    }
}
