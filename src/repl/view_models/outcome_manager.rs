//! # Fetch Outcome Handling
//!
//! Folds server results back into the view model. Successful writes ask for
//! a refetch; failures leave every piece of local state exactly as it was.

use crate::repl::events::{Focus, ViewEvent};
use crate::repl::models::Post;
use crate::repl::services::{FetchOutcome, Intent};
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Apply one outcome and return the follow-up request, if any
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> Option<Intent> {
        match outcome {
            FetchOutcome::Listed { seq, posts } => {
                self.apply_post_list(seq, posts);
                None
            }
            FetchOutcome::Created => {
                self.create_form.complete();
                if self.focus == Focus::CreateForm {
                    self.set_focus(Focus::List);
                }
                self.emit_view_event([ViewEvent::ContentRedrawRequired]);
                Some(Intent::Refresh)
            }
            FetchOutcome::Updated { .. } | FetchOutcome::Deleted { .. } => Some(Intent::Refresh),
            FetchOutcome::ListFailed { seq, .. } => {
                tracing::debug!("Keeping current posts after failed fetch #{}", seq);
                None
            }
            FetchOutcome::CreateFailed { .. } => {
                tracing::debug!("Keeping create form open after failed create");
                None
            }
            FetchOutcome::UpdateFailed { id, .. } => {
                tracing::debug!("Post {} stays in edit mode after failed update", id);
                None
            }
            FetchOutcome::DeleteFailed { id, .. } => {
                tracing::debug!("Post {} kept after failed delete", id);
                None
            }
        }
    }

    /// Replace the list from fetch `seq`, keeping the selection on the same
    /// post when it survived
    pub fn apply_post_list(&mut self, seq: u64, posts: Vec<Post>) -> bool {
        let previously_selected = self.selected_id();
        if !self.store.apply_fetch(seq, posts) {
            return false;
        }

        self.selected = previously_selected
            .and_then(|id| self.store.position(&id))
            .unwrap_or(self.selected)
            .min(self.store.len().saturating_sub(1));

        // Every row is back in view mode after a refetch
        if self.focus == Focus::RowInput {
            self.set_focus(Focus::List);
        }

        self.status_line.set_post_count(self.store.len());
        self.emit_view_event([
            ViewEvent::ContentRedrawRequired,
            ViewEvent::StatusBarUpdateRequired,
        ]);
        tracing::info!("Post list #{} applied: {} posts", seq, self.store.len());
        true
    }
}
