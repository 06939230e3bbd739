//! # Create Form Model
//!
//! The single "new post" draft and whether its form is on screen.

/// Draft state for a post that has not been sent yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    visible: bool,
    entry: String,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hide the form. The typed text is kept for the next time it opens.
    pub fn cancel(&mut self) {
        self.visible = false;
    }

    pub fn push_char(&mut self, ch: char) {
        self.entry.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.entry.pop();
    }

    pub fn set_entry<S: Into<String>>(&mut self, entry: S) {
        self.entry = entry.into();
    }

    /// Called once the server accepted the post
    pub fn complete(&mut self) {
        self.entry.clear();
        self.visible = false;
    }
}
