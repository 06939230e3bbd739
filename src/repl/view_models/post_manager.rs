//! # Post List Management
//!
//! Selection, per-row edit mode and the update/delete requests that go
//! with it.

use crate::repl::events::{Focus, SelectionDirection, ViewEvent};
use crate::repl::models::{PostId, PostRow};
use crate::repl::services::Intent;
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    pub fn rows(&self) -> impl Iterator<Item = PostRow<'_>> {
        self.store.rows()
    }

    pub fn post_count(&self) -> usize {
        self.store.len()
    }

    /// Index of the selected row, if the list is not empty
    pub fn selected_index(&self) -> Option<usize> {
        (!self.store.is_empty()).then_some(self.selected)
    }

    pub fn selected_id(&self) -> Option<PostId> {
        self.store.row(self.selected).map(|row| row.post.id.clone())
    }

    pub fn selected_row(&self) -> Option<PostRow<'_>> {
        self.store.row(self.selected)
    }

    pub fn move_selection(&mut self, direction: SelectionDirection) {
        if self.store.is_empty() {
            return;
        }
        let last = self.store.len() - 1;
        let target = match direction {
            SelectionDirection::Up => self.selected.saturating_sub(1),
            SelectionDirection::Down => (self.selected + 1).min(last),
            SelectionDirection::First => 0,
            SelectionDirection::Last => last,
        };
        if target != self.selected {
            self.selected = target;
            self.emit_view_event([ViewEvent::ContentRedrawRequired]);
        }
    }

    /// Put the row with `id` into edit mode, seeded with its server text
    pub fn begin_edit(&mut self, id: &PostId) -> bool {
        if !self.store.begin_edit(id) {
            tracing::debug!("Ignoring edit for unknown post {}", id);
            return false;
        }
        self.emit_view_event([ViewEvent::ContentRedrawRequired]);
        true
    }

    /// "Edit" on the selected row
    ///
    /// A row already in edit mode just regains input focus; its draft is
    /// kept.
    pub fn edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if !self.store.is_editing(&id) && !self.begin_edit(&id) {
            return;
        }
        self.set_focus(Focus::RowInput);
    }

    /// Leave the row input; the row stays in edit mode
    pub fn leave_row_input(&mut self) {
        if self.focus == Focus::RowInput {
            self.set_focus(Focus::List);
        }
    }

    pub fn insert_edit_char(&mut self, ch: char) {
        if let Some(id) = self.selected_id() {
            if self.store.push_draft_char(&id, ch) {
                self.emit_view_event([ViewEvent::ContentRedrawRequired]);
            }
        }
    }

    pub fn backspace_edit(&mut self) {
        if let Some(id) = self.selected_id() {
            if self.store.pop_draft_char(&id) {
                self.emit_view_event([ViewEvent::ContentRedrawRequired]);
            }
        }
    }

    pub fn updated_entry(&self, id: &PostId) -> Option<&str> {
        self.store.updated_entry(id)
    }

    pub fn is_editing(&self, id: &PostId) -> bool {
        self.store.is_editing(id)
    }

    /// Ask for the draft of `id` to be saved
    ///
    /// Returns `None` when the row is not in edit mode.
    pub fn submit_update(&self, id: &PostId) -> Option<Intent> {
        if !self.store.is_editing(id) {
            return None;
        }
        let entry = self.store.updated_entry(id)?.to_string();
        Some(Intent::Update {
            id: id.clone(),
            entry,
        })
    }

    pub fn submit_update_selected(&self) -> Option<Intent> {
        let id = self.selected_id()?;
        self.submit_update(&id)
    }

    /// Ask for `id` to be deleted
    ///
    /// The id does not have to be in the current list; the server decides.
    pub fn delete(&self, id: &PostId) -> Intent {
        Intent::Delete { id: id.clone() }
    }

    pub fn delete_selected(&self) -> Option<Intent> {
        self.selected_id().map(|id| self.delete(&id))
    }

    pub fn refresh(&self) -> Intent {
        Intent::Refresh
    }
}
