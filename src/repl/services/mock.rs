//! # Mock Blog API
//!
//! In-memory stand-in for the blog server, used by unit and integration
//! tests. It behaves like a real server (ids are assigned on create, unknown
//! ids answer 404) and can be told to fail specific calls.

use super::blog_api::{ApiError, BlogApi, Operation};
use crate::repl::models::{Post, PostId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A call received by the mock server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Create { entry: String },
    Update { id: PostId, entry: String },
    Delete { id: PostId },
}

#[derive(Debug, Default)]
struct MockState {
    posts: Vec<Post>,
    next_id: u64,
    calls: Vec<ApiCall>,
    /// One-shot failures, consumed by the next call of that operation
    fail_next: HashMap<Operation, u16>,
    /// Failures that stay until cleared
    fail_always: HashMap<Operation, u16>,
}

impl MockState {
    fn injected_failure(&mut self, operation: Operation) -> Option<ApiError> {
        let status = self
            .fail_next
            .remove(&operation)
            .or_else(|| self.fail_always.get(&operation).copied())?;
        tracing::debug!("MockBlogApi failing {} with {}", operation, status);
        Some(ApiError::Status { operation, status })
    }
}

/// Cloneable handle to a shared in-memory blog server
#[derive(Debug, Clone, Default)]
pub struct MockBlogApi {
    state: Arc<Mutex<MockState>>,
}

impl MockBlogApi {
    pub fn new() -> Self {
        Self::with_entries::<&str>(&[])
    }

    /// Start with one post per entry, numbered from 1
    pub fn with_entries<S: AsRef<str>>(entries: &[S]) -> Self {
        let api = Self::default();
        {
            let mut state = api.lock();
            state.next_id = 1;
            for entry in entries {
                let id = state.next_id;
                state.next_id += 1;
                state.posts.push(Post::new(id, entry.as_ref()));
            }
        }
        api
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the server-side posts
    pub fn posts(&self) -> Vec<Post> {
        self.lock().posts.clone()
    }

    /// Every call received so far, in order
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    /// Fail only the next call of `operation` with `status`
    pub fn fail_next(&self, operation: Operation, status: u16) {
        self.lock().fail_next.insert(operation, status);
    }

    /// Fail every call of `operation` with `status` until [`Self::recover`]
    pub fn fail_always(&self, operation: Operation, status: u16) {
        self.lock().fail_always.insert(operation, status);
    }

    pub fn recover(&self, operation: Operation) {
        let mut state = self.lock();
        state.fail_next.remove(&operation);
        state.fail_always.remove(&operation);
    }

    /// Change a post behind the client's back, as another client would
    pub fn edit_on_server(&self, id: &PostId, entry: &str) -> bool {
        let mut state = self.lock();
        match state.posts.iter_mut().find(|post| &post.id == id) {
            Some(post) => {
                post.entry = entry.to_string();
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl BlogApi for MockBlogApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let mut state = self.lock();
        state.calls.push(ApiCall::List);
        if let Some(error) = state.injected_failure(Operation::List) {
            return Err(error);
        }
        Ok(state.posts.clone())
    }

    async fn create_post(&self, entry: &str) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.calls.push(ApiCall::Create {
            entry: entry.to_string(),
        });
        if let Some(error) = state.injected_failure(Operation::Create) {
            return Err(error);
        }
        let id = state.next_id.max(1);
        state.next_id = id + 1;
        state.posts.push(Post::new(id, entry));
        Ok(())
    }

    async fn update_post(&self, id: &PostId, entry: &str) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.calls.push(ApiCall::Update {
            id: id.clone(),
            entry: entry.to_string(),
        });
        if let Some(error) = state.injected_failure(Operation::Update) {
            return Err(error);
        }
        match state.posts.iter_mut().find(|post| &post.id == id) {
            Some(post) => {
                post.entry = entry.to_string();
                Ok(())
            }
            None => Err(ApiError::Status {
                operation: Operation::Update,
                status: 404,
            }),
        }
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.calls.push(ApiCall::Delete { id: id.clone() });
        if let Some(error) = state.injected_failure(Operation::Delete) {
            return Err(error);
        }
        let before = state.posts.len();
        state.posts.retain(|post| &post.id != id);
        if state.posts.len() == before {
            return Err(ApiError::Status {
                operation: Operation::Delete,
                status: 404,
            });
        }
        Ok(())
    }
}
