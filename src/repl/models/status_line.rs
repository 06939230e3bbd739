//! # Status Line Model
//!
//! Encapsulates all state related to the status line display,
//! providing a clean interface for status bar rendering.

use crate::repl::events::Focus;

/// Status line model containing all status bar display state
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Profile the server URL was loaded from
    profile_name: String,

    /// Base URL of the blog server
    server: String,

    /// Where keyboard input currently goes
    focus: Focus,

    /// Number of posts in the last applied list
    post_count: usize,
}

impl StatusLine {
    /// Create a new StatusLine with default values
    pub fn new() -> Self {
        Self {
            profile_name: "default".to_string(),
            server: crate::config::DEFAULT_SERVER_URL.to_string(),
            focus: Focus::List,
            post_count: 0,
        }
    }

    // === Profile Methods ===

    pub fn set_profile_name(&mut self, name: String) {
        self.profile_name = name;
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn set_server<S: Into<String>>(&mut self, server: S) {
        self.server = server.into();
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    // === Input State Methods ===

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_post_count(&mut self, count: usize) {
        self.post_count = count;
    }

    pub fn post_count(&self) -> usize {
        self.post_count
    }

    /// Left-hand status text, vim-style mode indicator
    pub fn mode_label(&self) -> &'static str {
        match self.focus {
            Focus::List => "LIST",
            Focus::CreateForm => "CREATE",
            Focus::RowInput => "EDIT",
        }
    }

    /// Right-hand status text
    pub fn summary(&self) -> String {
        let noun = if self.post_count == 1 { "post" } else { "posts" };
        format!(
            "[{}] {}  {} {}",
            self.profile_name, self.server, self.post_count, noun
        )
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}
