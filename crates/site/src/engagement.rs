//! Per-project likes and comments for the current session.
//!
//! Likes are applied optimistically: the toggle shows immediately and is
//! reconciled with the backend's answer, or undone if the backend fails.
//! Comments only appear once the backend has accepted them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use folio_core::comment::{normalize_body, Comment, CommentAuthor, MAX_COMMENT_LENGTH};
use folio_core::engagement::LikeOutcome;
use folio_core::types::DbId;
use folio_core::user::CurrentUser;
use uuid::Uuid;

use crate::backend::{BackendError, EngagementBackend};
use crate::optimistic::{Optimistic, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngagementError {
    #[error("Sign in to like or comment")]
    Unauthenticated,

    #[error("Comment is empty")]
    EmptyComment,

    #[error("Comment is longer than {max} characters")]
    CommentTooLong { max: u64 },

    #[error("A like on this project is still being saved")]
    LikePending,

    #[error("A comment on this project is still being sent")]
    CommentPending,

    #[error("Unknown project {0}")]
    UnknownProject(DbId),

    #[error("Could not reach the server: {0}")]
    NetworkFailure(#[from] BackendError),
}

/// The liked flag and its counter, which always change together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LikeState {
    liked: bool,
    like_count: u64,
}

impl From<LikeOutcome> for LikeState {
    fn from(o: LikeOutcome) -> Self {
        Self {
            liked: o.liked,
            like_count: o.like_count,
        }
    }
}

#[derive(Debug)]
struct Entry {
    like: Optimistic<LikeState>,
    /// Newest first.
    comments: Vec<Comment>,
    submitting: bool,
}

/// Snapshot of one project's engagement.
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementState {
    pub liked: bool,
    pub like_count: u64,
    /// Comments added this session, newest first.
    pub comments: Vec<Comment>,
    pub like_pending: bool,
    pub submitting_comment: bool,
}

pub struct EngagementStore {
    backend: Arc<dyn EngagementBackend>,
    entries: Mutex<HashMap<DbId, Entry>>,
}

impl EngagementStore {
    pub fn new(backend: Arc<dyn EngagementBackend>) -> Self {
        Self {
            backend,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Start tracking a project with its published like count. Projects
    /// already tracked keep their session state.
    pub fn register(&self, project_id: DbId, like_count: u64) {
        self.lock().entry(project_id).or_insert_with(|| Entry {
            like: Optimistic::new(LikeState {
                liked: false,
                like_count,
            }),
            comments: Vec::new(),
            submitting: false,
        });
    }

    pub fn state(&self, project_id: DbId) -> Option<EngagementState> {
        self.lock().get(&project_id).map(|e| {
            let like = e.like.value();
            EngagementState {
                liked: like.liked,
                like_count: like.like_count,
                comments: e.comments.clone(),
                like_pending: e.like.is_pending(),
                submitting_comment: e.submitting,
            }
        })
    }

    /// Flip the caller's like on `project_id`.
    ///
    /// The flipped state is visible through [`state`](Self::state) before the
    /// backend answers. On success the backend's outcome replaces it; on
    /// failure the state from just before this toggle is restored. A toggle
    /// issued while another is in flight is refused with
    /// [`EngagementError::LikePending`].
    pub async fn toggle_like(
        &self,
        project_id: DbId,
        user: Option<&CurrentUser>,
    ) -> Result<LikeOutcome, EngagementError> {
        let user = user.ok_or(EngagementError::Unauthenticated)?;

        let request = {
            let mut entries = self.lock();
            let entry = entries
                .get_mut(&project_id)
                .ok_or(EngagementError::UnknownProject(project_id))?;
            entry
                .like
                .begin(|s| {
                    s.liked = !s.liked;
                    s.like_count = if s.liked {
                        s.like_count + 1
                    } else {
                        s.like_count.saturating_sub(1)
                    };
                })
                .ok_or(EngagementError::LikePending)?
        };
        tracing::debug!(project_id, %request, "Like toggled optimistically");

        let in_flight = InFlight::new(self, project_id, Operation::Like(request));
        let result = self.backend.toggle_like(project_id, user).await;
        in_flight.settle();

        let mut entries = self.lock();
        let Some(entry) = entries.get_mut(&project_id) else {
            return Err(EngagementError::UnknownProject(project_id));
        };
        match result {
            Ok(outcome) => {
                entry.like.commit(request, outcome.into());
                Ok(outcome)
            }
            Err(e) => {
                entry.like.rollback(request);
                tracing::warn!(project_id, error = %e, "Like failed, rolled back");
                Err(EngagementError::NetworkFailure(e))
            }
        }
    }

    /// Post a comment on `project_id` and, once the backend accepts it, put it
    /// at the front of the project's comments. Nothing is added on failure.
    pub async fn add_comment(
        &self,
        project_id: DbId,
        user: Option<&CurrentUser>,
        body: &str,
    ) -> Result<Comment, EngagementError> {
        let user = user.ok_or(EngagementError::Unauthenticated)?;
        let content = normalize_body(body).ok_or(EngagementError::EmptyComment)?;
        if content.chars().count() as u64 > MAX_COMMENT_LENGTH {
            return Err(EngagementError::CommentTooLong {
                max: MAX_COMMENT_LENGTH,
            });
        }

        {
            let mut entries = self.lock();
            let entry = entries
                .get_mut(&project_id)
                .ok_or(EngagementError::UnknownProject(project_id))?;
            if entry.submitting {
                return Err(EngagementError::CommentPending);
            }
            entry.submitting = true;
        }

        let draft = Comment {
            id: Uuid::now_v7().to_string(),
            content,
            author: CommentAuthor::new(None, user.display_name()),
            project_id: Some(project_id),
            achievement_id: None,
            created_at: Utc::now(),
            likes: 0,
        };
        let in_flight = InFlight::new(self, project_id, Operation::Comment);
        let result = self.backend.submit_comment(project_id, user, &draft).await;
        in_flight.settle();

        let mut entries = self.lock();
        let Some(entry) = entries.get_mut(&project_id) else {
            return Err(EngagementError::UnknownProject(project_id));
        };
        entry.submitting = false;
        match result {
            Ok(comment) => {
                entry.comments.insert(0, comment.clone());
                tracing::debug!(project_id, comment_id = %comment.id, "Comment added");
                Ok(comment)
            }
            Err(e) => {
                tracing::warn!(project_id, error = %e, "Comment failed");
                Err(EngagementError::NetworkFailure(e))
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<DbId, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Like(RequestId),
    Comment,
}

/// Held across a backend call. If the calling future is dropped before the
/// call returns, the pending like is rolled back or the comment slot freed,
/// so the project never stays pending.
struct InFlight<'a> {
    store: &'a EngagementStore,
    project_id: DbId,
    operation: Operation,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(store: &'a EngagementStore, project_id: DbId, operation: Operation) -> Self {
        Self {
            store,
            project_id,
            operation,
            settled: false,
        }
    }

    /// The backend answered; the caller reconciles the entry itself.
    fn settle(mut self) {
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut entries = self.store.lock();
        let Some(entry) = entries.get_mut(&self.project_id) else {
            return;
        };
        match self.operation {
            Operation::Like(request) => {
                if entry.like.rollback(request) {
                    tracing::warn!(
                        project_id = self.project_id,
                        %request,
                        "Like abandoned, rolled back"
                    );
                }
            }
            Operation::Comment => {
                entry.submitting = false;
                tracing::warn!(project_id = self.project_id, "Comment abandoned");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;

    use super::*;
    use crate::backend::MockEngagementBackend;

    const ORIGINAL: u64 = 24;

    fn user() -> CurrentUser {
        CurrentUser::new("Ada Lovelace", "ada@example.com")
    }

    fn store_with(backend: MockEngagementBackend) -> (EngagementStore, Arc<MockEngagementBackend>) {
        let backend = Arc::new(backend);
        let store = EngagementStore::new(backend.clone());
        store.register(1, ORIGINAL);
        (store, backend)
    }

    fn seeded_backend() -> MockEngagementBackend {
        let mut projects = folio_core::fixtures::projects();
        projects.truncate(1);
        MockEngagementBackend::seeded(&projects)
    }

    fn like_of(store: &EngagementStore) -> (bool, u64) {
        let s = store.state(1).unwrap();
        (s.liked, s.like_count)
    }

    #[tokio::test]
    async fn anonymous_like_is_rejected_without_mutation() {
        let (store, backend) = store_with(seeded_backend());

        assert_matches!(
            store.toggle_like(1, None).await,
            Err(EngagementError::Unauthenticated)
        );
        assert_eq!(like_of(&store), (false, ORIGINAL));
        assert_eq!(backend.like_calls(), 0);
    }

    #[tokio::test]
    async fn successful_like_adopts_server_outcome() {
        let (store, backend) = store_with(seeded_backend());

        let outcome = store.toggle_like(1, Some(&user())).await.unwrap();
        assert_eq!(outcome, LikeOutcome { liked: true, like_count: ORIGINAL + 1 });
        assert_eq!(like_of(&store), (true, ORIGINAL + 1));
        assert_eq!(backend.like_calls(), 1);
    }

    #[tokio::test]
    async fn double_toggle_returns_to_original() {
        let (store, _) = store_with(seeded_backend());

        store.toggle_like(1, Some(&user())).await.unwrap();
        store.toggle_like(1, Some(&user())).await.unwrap();
        assert_eq!(like_of(&store), (false, ORIGINAL));
    }

    #[tokio::test]
    async fn failed_first_toggle_restores_original() {
        let (store, backend) = store_with(seeded_backend());
        backend.fail_next_likes(1);

        assert_matches!(
            store.toggle_like(1, Some(&user())).await,
            Err(EngagementError::NetworkFailure(_))
        );
        assert_eq!(like_of(&store), (false, ORIGINAL));
        assert!(!store.state(1).unwrap().like_pending);
    }

    #[tokio::test]
    async fn failed_toggle_after_success_restores_its_own_snapshot() {
        let (store, backend) = store_with(seeded_backend());

        store.toggle_like(1, Some(&user())).await.unwrap();
        assert_eq!(like_of(&store), (true, ORIGINAL + 1));

        backend.fail_next_likes(1);
        assert!(store.toggle_like(1, Some(&user())).await.is_err());
        assert_eq!(like_of(&store), (true, ORIGINAL + 1));
    }

    #[tokio::test]
    async fn like_count_never_goes_negative() {
        let backend = Arc::new(MockEngagementBackend::new());
        let store = EngagementStore::new(backend.clone());
        store.register(9, 0);

        backend.fail_next_likes(1);
        let _ = store.toggle_like(9, Some(&user())).await;
        for _ in 0..5 {
            store.toggle_like(9, Some(&user())).await.unwrap();
            assert!(store.state(9).unwrap().like_count <= 1);
        }
        assert_eq!(store.state(9).unwrap().like_count, 1);
    }

    #[tokio::test]
    async fn optimistic_state_is_visible_while_pending_and_reentry_is_refused() {
        let (store, backend) =
            store_with(seeded_backend().with_like_latency(Duration::from_millis(50)));
        let user = user();

        let first = store.toggle_like(1, Some(&user));
        let second = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let pending = store.state(1).unwrap();
            assert!(pending.like_pending);
            assert_eq!((pending.liked, pending.like_count), (true, ORIGINAL + 1));
            store.toggle_like(1, Some(&user)).await
        };
        let (first, second) = tokio::join!(first, second);

        assert!(first.is_ok());
        assert_matches!(second, Err(EngagementError::LikePending));
        assert_eq!(backend.like_calls(), 1);
        assert_eq!(like_of(&store), (true, ORIGINAL + 1));
    }

    #[tokio::test]
    async fn unknown_project_is_reported() {
        let (store, _) = store_with(seeded_backend());
        assert_matches!(
            store.toggle_like(2, Some(&user())).await,
            Err(EngagementError::UnknownProject(2))
        );
        assert_matches!(
            store.add_comment(2, Some(&user()), "hi").await,
            Err(EngagementError::UnknownProject(2))
        );
    }

    #[tokio::test]
    async fn blank_or_anonymous_comments_change_nothing() {
        let (store, backend) = store_with(seeded_backend());

        assert_matches!(
            store.add_comment(1, Some(&user()), "  \n\t ").await,
            Err(EngagementError::EmptyComment)
        );
        assert_matches!(
            store.add_comment(1, None, "hello").await,
            Err(EngagementError::Unauthenticated)
        );
        assert!(store.state(1).unwrap().comments.is_empty());
        assert_eq!(backend.comment_calls(), 0);
    }

    #[tokio::test]
    async fn comments_are_prepended_with_author_details() {
        let (store, _) = store_with(seeded_backend());

        store.add_comment(1, Some(&user()), "first").await.unwrap();
        let second = store.add_comment(1, Some(&user()), "  second  ").await.unwrap();

        assert_eq!(second.content, "second");
        assert_eq!(second.author.name, "Ada Lovelace");
        assert_eq!(second.author.initials, "AL");
        assert_eq!(second.likes, 0);

        let comments = store.state(1).unwrap().comments;
        let bodies: Vec<_> = comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(bodies, vec!["second", "first"]);
        assert_ne!(comments[0].id, comments[1].id);
    }

    #[tokio::test]
    async fn failed_comment_leaves_nothing_behind() {
        let (store, backend) = store_with(seeded_backend());
        backend.fail_next_comments(1);

        assert_matches!(
            store.add_comment(1, Some(&user()), "lost").await,
            Err(EngagementError::NetworkFailure(_))
        );
        let state = store.state(1).unwrap();
        assert!(state.comments.is_empty());
        assert!(!state.submitting_comment);
    }

    #[tokio::test]
    async fn concurrent_comment_is_refused() {
        let (store, backend) =
            store_with(seeded_backend().with_comment_latency(Duration::from_millis(50)));
        let user = user();

        let first = store.add_comment(1, Some(&user), "one");
        let second = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            assert!(store.state(1).unwrap().submitting_comment);
            store.add_comment(1, Some(&user), "two").await
        };
        let (first, second) = tokio::join!(first, second);

        assert!(first.is_ok());
        assert_matches!(second, Err(EngagementError::CommentPending));
        assert_eq!(backend.comment_calls(), 1);
        assert_eq!(store.state(1).unwrap().comments.len(), 1);
    }

    #[tokio::test]
    async fn cancelled_like_rolls_back_and_can_be_retried() {
        let (store, _) = store_with(seeded_backend().with_like_latency(Duration::from_millis(50)));
        let user = user();

        let cancelled =
            tokio::time::timeout(Duration::from_millis(5), store.toggle_like(1, Some(&user))).await;
        assert!(cancelled.is_err());

        let state = store.state(1).unwrap();
        assert_eq!((state.liked, state.like_count), (false, ORIGINAL));
        assert!(!state.like_pending);

        let outcome = store.toggle_like(1, Some(&user)).await.unwrap();
        assert_eq!(outcome, LikeOutcome { liked: true, like_count: ORIGINAL + 1 });
        assert_eq!(like_of(&store), (true, ORIGINAL + 1));
    }

    #[tokio::test]
    async fn cancelled_comment_frees_the_slot() {
        let (store, _) =
            store_with(seeded_backend().with_comment_latency(Duration::from_millis(50)));
        let user = user();

        let cancelled = tokio::time::timeout(
            Duration::from_millis(5),
            store.add_comment(1, Some(&user), "slow"),
        )
        .await;
        assert!(cancelled.is_err());

        let state = store.state(1).unwrap();
        assert!(!state.submitting_comment);
        assert!(state.comments.is_empty());

        store.add_comment(1, Some(&user), "again").await.unwrap();
        assert_eq!(store.state(1).unwrap().comments.len(), 1);
    }

    #[tokio::test]
    async fn overlong_comment_is_refused_before_sending() {
        let (store, backend) = store_with(seeded_backend());
        let body = "x".repeat(MAX_COMMENT_LENGTH as usize + 1);

        assert_matches!(
            store.add_comment(1, Some(&user()), &body).await,
            Err(EngagementError::CommentTooLong { max: MAX_COMMENT_LENGTH })
        );
        assert_eq!(backend.comment_calls(), 0);

        let longest = "x".repeat(MAX_COMMENT_LENGTH as usize);
        assert!(store.add_comment(1, Some(&user()), &longest).await.is_ok());
    }
}
