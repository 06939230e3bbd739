//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.
//! This maintains proper separation of concerns - commands suggest, controller decides.

use crate::repl::events::SelectionDirection;

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Show the create form
    CreateFormOpenRequested,

    /// Hide the create form, keeping its text
    CreateFormCancelRequested,

    /// Append a character to the create draft
    CreateCharInsertRequested { ch: char },

    /// Remove the last character of the create draft
    CreateBackspaceRequested,

    /// Send the create draft to the server
    CreateSubmitRequested,

    /// Move the list selection
    SelectionMoveRequested { direction: SelectionDirection },

    /// Enter edit mode on the selected row
    EditRequested,

    /// Append a character to the selected row's draft
    EditCharInsertRequested { ch: char },

    /// Remove the last character of the selected row's draft
    EditBackspaceRequested,

    /// Stop typing into the row input (the row stays in edit mode)
    EditFocusLeaveRequested,

    /// Send the selected row's draft to the server
    UpdateSubmitRequested,

    /// Delete the selected row on the server
    DeleteRequested,

    /// Reload the post list
    RefreshRequested,

    /// Request to quit application
    QuitRequested,
}
