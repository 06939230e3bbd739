//! # Blog API
//!
//! The contract of the remote blog server, as seen by the client.
//!
//! | Call   | Method | Path                | Body      |
//! |--------|--------|---------------------|-----------|
//! | List   | GET    | `/blog/getAll`      | -         |
//! | Create | POST   | `/blog/create`      | `{entry}` |
//! | Update | POST   | `/blog/update/{id}` | `{entry}` |
//! | Delete | POST   | `/blog/delete/{id}` | -         |

use crate::repl::models::{Post, PostId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Which of the four calls an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Failure of a blog API call
///
/// The UI treats every variant the same way (log and leave state as-is);
/// the variants exist so the log says what went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} request returned HTTP {status}")]
    Status { operation: Operation, status: u16 },

    #[error("failed to decode {operation} response: {message}")]
    Decode {
        operation: Operation,
        message: String,
    },

    #[error("invalid server URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status of the failed call, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The four calls the client makes against the blog server
#[async_trait]
pub trait BlogApi: Send + Sync {
    /// Fetch every post, in server order
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// Create a post with the given text
    async fn create_post(&self, entry: &str) -> Result<(), ApiError>;

    /// Replace the text of an existing post
    async fn update_post(&self, id: &PostId, entry: &str) -> Result<(), ApiError>;

    /// Delete a post
    async fn delete_post(&self, id: &PostId) -> Result<(), ApiError>;
}
