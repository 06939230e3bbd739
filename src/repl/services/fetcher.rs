//! # Fetcher
//!
//! Runs blog API calls in the background and reports their outcomes.
//!
//! Each call is spawned as a tokio task; the result comes back through an
//! internal channel that the UI loop drains without blocking. Nothing is
//! retried, cancelled or de-duplicated. Failures are logged here, once, and
//! then handed back so the view model can leave its state alone.
//!
//! List fetches carry a sequence number so the consumer can drop a response
//! that arrives after a newer one.

use super::blog_api::{ApiError, BlogApi};
use crate::repl::models::{Post, PostId};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Capacity of the outcome channel
const OUTCOME_CHANNEL_SIZE: usize = 32;

/// Work the view model asks the fetcher to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Refresh,
    Create { entry: String },
    Update { id: PostId, entry: String },
    Delete { id: PostId },
}

/// Result of one background API call
#[derive(Debug)]
pub enum FetchOutcome {
    Listed { seq: u64, posts: Vec<Post> },
    ListFailed { seq: u64, error: ApiError },
    Created,
    CreateFailed { error: ApiError },
    Updated { id: PostId },
    UpdateFailed { id: PostId, error: ApiError },
    Deleted { id: PostId },
    DeleteFailed { id: PostId, error: ApiError },
}

/// Dispatches API calls and collects their outcomes
pub struct Fetcher {
    api: Arc<dyn BlogApi>,
    /// Sequence number handed to the next list fetch
    next_seq: u64,
    /// Calls dispatched whose outcome has not been received yet
    pending: usize,
    outcome_sender: mpsc::Sender<FetchOutcome>,
    outcome_receiver: mpsc::Receiver<FetchOutcome>,
}

impl Fetcher {
    pub fn new(api: Arc<dyn BlogApi>) -> Self {
        let (outcome_sender, outcome_receiver) = mpsc::channel(OUTCOME_CHANNEL_SIZE);
        Self {
            api,
            next_seq: 1,
            pending: 0,
            outcome_sender,
            outcome_receiver,
        }
    }

    /// Number of calls still in flight
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.pending == 0
    }

    /// Start whatever call the intent describes
    pub fn dispatch(&mut self, intent: Intent) {
        tracing::debug!("Dispatching {:?}", intent);
        match intent {
            Intent::Refresh => {
                self.fetch_posts();
            }
            Intent::Create { entry } => self.create_post(entry),
            Intent::Update { id, entry } => self.update_post(id, entry),
            Intent::Delete { id } => self.delete_post(id),
        }
    }

    /// Start a list fetch and return its sequence number
    pub fn fetch_posts(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.spawn(move |api| async move {
            match api.list_posts().await {
                Ok(posts) => {
                    tracing::debug!("Fetch #{} returned {} posts", seq, posts.len());
                    FetchOutcome::Listed { seq, posts }
                }
                Err(error) => {
                    tracing::error!("Error fetching posts: {}", error);
                    FetchOutcome::ListFailed { seq, error }
                }
            }
        });
        seq
    }

    pub fn create_post(&mut self, entry: String) {
        self.spawn(move |api| async move {
            match api.create_post(&entry).await {
                Ok(()) => FetchOutcome::Created,
                Err(error) => {
                    tracing::error!("Error creating post: {}", error);
                    FetchOutcome::CreateFailed { error }
                }
            }
        });
    }

    pub fn update_post(&mut self, id: PostId, entry: String) {
        self.spawn(move |api| async move {
            match api.update_post(&id, &entry).await {
                Ok(()) => FetchOutcome::Updated { id },
                Err(error) => {
                    tracing::error!("Error updating post {}: {}", id, error);
                    FetchOutcome::UpdateFailed { id, error }
                }
            }
        });
    }

    pub fn delete_post(&mut self, id: PostId) {
        self.spawn(move |api| async move {
            match api.delete_post(&id).await {
                Ok(()) => FetchOutcome::Deleted { id },
                Err(error) => {
                    tracing::error!("Error deleting post {}: {}", id, error);
                    FetchOutcome::DeleteFailed { id, error }
                }
            }
        });
    }

    /// Take an outcome if one is ready (non-blocking)
    pub fn poll_outcome(&mut self) -> Option<FetchOutcome> {
        let outcome = self.outcome_receiver.try_recv().ok()?;
        self.pending = self.pending.saturating_sub(1);
        Some(outcome)
    }

    /// Wait for the next outcome; `None` once nothing is in flight
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        if self.pending == 0 {
            return None;
        }
        let outcome = self.outcome_receiver.recv().await?;
        self.pending = self.pending.saturating_sub(1);
        Some(outcome)
    }

    fn spawn<F, Fut>(&mut self, call: F)
    where
        F: FnOnce(Arc<dyn BlogApi>) -> Fut,
        Fut: std::future::Future<Output = FetchOutcome> + Send + 'static,
    {
        self.pending += 1;
        let sender = self.outcome_sender.clone();
        let task = call(Arc::clone(&self.api));
        tokio::spawn(async move {
            let outcome = task.await;
            // Receiver gone means the app is shutting down
            if sender.send(outcome).await.is_err() {
                tracing::debug!("Dropping fetch outcome, receiver closed");
            }
        });
    }
}
