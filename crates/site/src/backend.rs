//! Where likes and comments are persisted.
//!
//! [`HttpEngagementBackend`] talks to the folio API. The
//! [`MockEngagementBackend`] keeps everything in memory, waits a configurable
//! latency and can be told to fail, which is how the demo site and the
//! tests exercise the rollback paths.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use folio_core::catalog::Project;
use folio_core::comment::Comment;
use folio_core::engagement::LikeOutcome;
use folio_core::types::DbId;
use folio_core::user::CurrentUser;
use serde_json::json;

use crate::http::{read_json, HttpError};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Failure injected into the mock backend.
    #[error("Simulated failure: {0}")]
    Simulated(String),
}

#[async_trait]
pub trait EngagementBackend: Send + Sync {
    /// Persist a like toggle and return the server's view of it.
    async fn toggle_like(
        &self,
        project_id: DbId,
        user: &CurrentUser,
    ) -> Result<LikeOutcome, BackendError>;

    /// Persist a comment. The returned comment is what gets displayed.
    async fn submit_comment(
        &self,
        project_id: DbId,
        user: &CurrentUser,
        comment: &Comment,
    ) -> Result<Comment, BackendError>;
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// Engagement backend for the folio API's `/projects/{id}/like` and
/// `/projects/{id}/comments` routes.
pub struct HttpEngagementBackend {
    client: reqwest::Client,
    api_url: String,
}

impl HttpEngagementBackend {
    /// * `api_url` - Base URL, e.g. `http://localhost:3000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    fn post(&self, path: &str, user: &CurrentUser) -> reqwest::RequestBuilder {
        let request = self.client.post(format!("{}/api/v1{path}", self.api_url));
        match &user.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl EngagementBackend for HttpEngagementBackend {
    async fn toggle_like(
        &self,
        project_id: DbId,
        user: &CurrentUser,
    ) -> Result<LikeOutcome, BackendError> {
        let response = self
            .post(&format!("/projects/{project_id}/like"), user)
            .send()
            .await
            .map_err(HttpError::from)?;
        Ok(read_json(response).await?)
    }

    async fn submit_comment(
        &self,
        project_id: DbId,
        user: &CurrentUser,
        comment: &Comment,
    ) -> Result<Comment, BackendError> {
        let response = self
            .post(&format!("/projects/{project_id}/comments"), user)
            .json(&json!({ "content": comment.content }))
            .send()
            .await
            .map_err(HttpError::from)?;
        Ok(read_json(response).await?)
    }
}

// ---------------------------------------------------------------------------
// Mock
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct MockState {
    /// `(liked, like_count)` per project as the "server" sees it.
    likes: HashMap<DbId, (bool, u64)>,
    fail_likes: usize,
    fail_comments: usize,
    like_calls: usize,
    comment_calls: usize,
}

/// In-memory stand-in for the API with simulated latency and injectable
/// failures.
#[derive(Debug, Default)]
pub struct MockEngagementBackend {
    like_latency: Duration,
    comment_latency: Duration,
    state: Mutex<MockState>,
}

impl MockEngagementBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the server-side like counters from the projects' counters.
    pub fn seeded(projects: &[Project]) -> Self {
        let backend = Self::new();
        {
            let mut state = backend.lock();
            for p in projects {
                state.likes.insert(p.id, (false, p.likes_count));
            }
        }
        backend
    }

    pub fn with_like_latency(mut self, latency: Duration) -> Self {
        self.like_latency = latency;
        self
    }

    pub fn with_comment_latency(mut self, latency: Duration) -> Self {
        self.comment_latency = latency;
        self
    }

    /// Make the next `n` like toggles fail.
    pub fn fail_next_likes(&self, n: usize) {
        self.lock().fail_likes = n;
    }

    /// Make the next `n` comment submissions fail.
    pub fn fail_next_comments(&self, n: usize) {
        self.lock().fail_comments = n;
    }

    pub fn like_calls(&self) -> usize {
        self.lock().like_calls
    }

    pub fn comment_calls(&self) -> usize {
        self.lock().comment_calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EngagementBackend for MockEngagementBackend {
    async fn toggle_like(
        &self,
        project_id: DbId,
        _user: &CurrentUser,
    ) -> Result<LikeOutcome, BackendError> {
        self.lock().like_calls += 1;
        tokio::time::sleep(self.like_latency).await;

        let mut state = self.lock();
        if state.fail_likes > 0 {
            state.fail_likes -= 1;
            return Err(BackendError::Simulated(format!(
                "like on project {project_id} rejected"
            )));
        }
        let (liked, count) = state.likes.entry(project_id).or_default();
        *liked = !*liked;
        *count = if *liked {
            *count + 1
        } else {
            count.saturating_sub(1)
        };
        Ok(LikeOutcome {
            liked: *liked,
            like_count: *count,
        })
    }

    async fn submit_comment(
        &self,
        project_id: DbId,
        _user: &CurrentUser,
        comment: &Comment,
    ) -> Result<Comment, BackendError> {
        self.lock().comment_calls += 1;
        tokio::time::sleep(self.comment_latency).await;

        let mut state = self.lock();
        if state.fail_comments > 0 {
            state.fail_comments -= 1;
            return Err(BackendError::Simulated(format!(
                "comment on project {project_id} rejected"
            )));
        }
        Ok(comment.clone())
    }
}
