//! # Create Form Management
//!
//! Showing, hiding, typing into and submitting the new-post form.

use crate::repl::events::{Focus, ViewEvent};
use crate::repl::services::Intent;
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Show the create form and send keystrokes to it
    pub fn open_create_form(&mut self) {
        self.create_form.open();
        self.set_focus(Focus::CreateForm);
        self.emit_view_event([ViewEvent::ContentRedrawRequired]);
    }

    /// Hide the create form; its text is kept
    pub fn cancel_create_form(&mut self) {
        self.create_form.cancel();
        if self.focus == Focus::CreateForm {
            self.set_focus(Focus::List);
        }
        self.emit_view_event([ViewEvent::ContentRedrawRequired]);
    }

    pub fn insert_create_char(&mut self, ch: char) {
        self.create_form.push_char(ch);
        self.emit_view_event([ViewEvent::ContentRedrawRequired]);
    }

    pub fn backspace_create(&mut self) {
        self.create_form.pop_char();
        self.emit_view_event([ViewEvent::ContentRedrawRequired]);
    }

    pub fn set_new_entry(&mut self, entry: &str) {
        self.create_form.set_entry(entry);
        self.emit_view_event([ViewEvent::ContentRedrawRequired]);
    }

    pub fn new_entry(&self) -> &str {
        self.create_form.entry()
    }

    pub fn is_create_form_visible(&self) -> bool {
        self.create_form.is_visible()
    }

    /// Ask for the draft to be created
    ///
    /// The form stays open with its text until the server accepts the post.
    /// Empty text is submitted as-is.
    pub fn submit_create(&self) -> Intent {
        Intent::Create {
            entry: self.create_form.entry().to_string(),
        }
    }
}
