//! # Post Store
//!
//! Holds the post list last received from the server together with a
//! client-only overlay of edit state keyed by post id.
//!
//! The server list is only ever replaced wholesale. Replacing it drops the
//! overlay, so every row is back in view mode with `updated_entry == entry`.

use super::post::{Post, PostId};
use std::collections::HashMap;

/// Client-only edit state for one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    draft: String,
}

impl EditState {
    fn seeded_from(post: &Post) -> Self {
        Self {
            draft: post.entry.clone(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }
}

/// A post as the view sees it: the record plus its overlay decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostRow<'a> {
    pub post: &'a Post,
    pub editing: bool,
    pub updated_entry: &'a str,
}

/// In-memory post list with edit overlay
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    overlay: HashMap<PostId, EditState>,
    last_applied_fetch: Option<u64>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list and reset every row to view mode
    pub fn replace(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.overlay.clear();
    }

    /// Apply the result of list fetch number `seq`
    ///
    /// Responses that arrive for a fetch older than the last applied one are
    /// dropped. Returns whether the list was replaced.
    pub fn apply_fetch(&mut self, seq: u64, posts: Vec<Post>) -> bool {
        if let Some(last) = self.last_applied_fetch {
            if seq <= last {
                tracing::debug!(
                    "Discarding stale post list from fetch #{} (already applied #{})",
                    seq,
                    last
                );
                return false;
            }
        }
        self.last_applied_fetch = Some(seq);
        self.replace(posts);
        true
    }

    pub fn last_applied_fetch(&self) -> Option<u64> {
        self.last_applied_fetch
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &PostId) -> Option<usize> {
        self.posts.iter().position(|post| &post.id == id)
    }

    /// Enter edit mode for `id`, seeding the draft with the server entry
    ///
    /// Calling this on a row that is already editing re-seeds its draft.
    /// Returns false if the id is not in the list.
    pub fn begin_edit(&mut self, id: &PostId) -> bool {
        let Some(post) = self.posts.iter().find(|post| &post.id == id) else {
            return false;
        };
        self.overlay.insert(id.clone(), EditState::seeded_from(post));
        true
    }

    pub fn is_editing(&self, id: &PostId) -> bool {
        self.overlay.contains_key(id)
    }

    pub fn push_draft_char(&mut self, id: &PostId, ch: char) -> bool {
        match self.overlay.get_mut(id) {
            Some(state) => {
                state.draft.push(ch);
                true
            }
            None => false,
        }
    }

    pub fn pop_draft_char(&mut self, id: &PostId) -> bool {
        match self.overlay.get_mut(id) {
            Some(state) => {
                state.draft.pop();
                true
            }
            None => false,
        }
    }

    /// The text that would be sent on update: the draft while editing,
    /// otherwise the server entry
    pub fn updated_entry(&self, id: &PostId) -> Option<&str> {
        match self.overlay.get(id) {
            Some(state) => Some(state.draft()),
            None => self.get(id).map(|post| post.entry.as_str()),
        }
    }

    pub fn row(&self, index: usize) -> Option<PostRow<'_>> {
        self.posts.get(index).map(|post| self.decorate(post))
    }

    /// Rows in server order with overlay decorations applied
    pub fn rows(&self) -> impl Iterator<Item = PostRow<'_>> {
        self.posts.iter().map(|post| self.decorate(post))
    }

    fn decorate<'a>(&'a self, post: &'a Post) -> PostRow<'a> {
        match self.overlay.get(&post.id) {
            Some(state) => PostRow {
                post,
                editing: true,
                updated_entry: state.draft(),
            },
            None => PostRow {
                post,
                editing: false,
                updated_entry: &post.entry,
            },
        }
    }
}
