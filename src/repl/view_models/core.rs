//! # Core ViewModel Structure
//!
//! Contains the main ViewModel struct and basic initialization logic.
//! Behaviour is split across sibling modules by concern:
//! `form_manager` (create form), `post_manager` (list, selection, editing)
//! and `outcome_manager` (applying server results).

use crate::repl::events::{Focus, ViewEvent};
use crate::repl::models::{CreateForm, PostStore, StatusLine};

/// State behind the blog screen
///
/// The view model never talks to the network. Operations that need the
/// server return an [`Intent`](crate::repl::services::Intent) for the
/// controller to hand to the fetcher, and server results come back in
/// through [`ViewModel::apply_outcome`].
#[derive(Debug)]
pub struct ViewModel {
    pub(super) store: PostStore,
    pub(super) create_form: CreateForm,
    pub(super) selected: usize,
    pub(super) focus: Focus,
    pub(super) status_line: StatusLine,
    pub(super) terminal_size: (u16, u16),
    pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            store: PostStore::new(),
            create_form: CreateForm::new(),
            selected: 0,
            focus: Focus::List,
            status_line: StatusLine::new(),
            terminal_size: (80, 24),
            pending_view_events: Vec::new(),
        }
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn create_form(&self) -> &CreateForm {
        &self.create_form
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub(super) fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            tracing::debug!("Focus {:?} -> {:?}", self.focus, focus);
            self.focus = focus;
            self.status_line.set_focus(focus);
            self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
        }
    }

    /// Name of the loaded profile, shown in the status bar
    pub fn set_profile_name(&mut self, profile_name: String) {
        self.status_line.set_profile_name(profile_name);
        self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
    }

    pub fn set_server(&mut self, server: &str) {
        self.status_line.set_server(server);
        self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.emit_view_event([ViewEvent::FullRedrawRequired]);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub(super) fn emit_view_event<I: IntoIterator<Item = ViewEvent>>(&mut self, events: I) {
        self.pending_view_events.extend(events);
    }

    /// Take the view events accumulated since the last call
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
