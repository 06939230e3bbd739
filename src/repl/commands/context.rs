//! # Command Context
//!
//! Read-only snapshot of the state commands need for their relevance checks.

use crate::repl::events::Focus;
use crate::repl::view_models::ViewModel;

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModelSnapshot {
    pub focus: Focus,
    pub has_selection: bool,
}

impl ViewModelSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            focus: view_model.focus(),
            has_selection: view_model.selected_index().is_some(),
        }
    }
}

/// Base context available to all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }

    pub fn focus(&self) -> Focus {
        self.state.focus
    }
}
