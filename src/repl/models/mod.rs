//! # Models Module
//!
//! Re-exports all model implementations organized by category.
//!
//! - [`Post`] / [`PostId`]: server records, never decorated
//! - [`PostStore`]: the last fetched list plus the client-only edit overlay
//! - [`CreateForm`]: the single new-post draft
//! - [`StatusLine`]: status bar state

pub mod create_form;
pub mod post;
pub mod post_store;
pub mod status_line;

pub use create_form::CreateForm;
pub use post::{EntryPayload, Post, PostId};
pub use post_store::{EditState, PostRow, PostStore};
pub use status_line::StatusLine;
