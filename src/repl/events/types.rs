//! # Core Event Types
//!
//! Small shared types used by commands, the view model and the renderer.

/// Where keyboard input is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Navigating the post list
    List,
    /// Typing into the create form
    CreateForm,
    /// Typing into the edit input of the selected row
    RowInput,
}

impl Focus {
    /// Whether printable keys should be treated as text
    pub fn accepts_text(self) -> bool {
        matches!(self, Focus::CreateForm | Focus::RowInput)
    }
}

/// Direction for selection movement in the post list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    Up,
    Down,
    First,
    Last,
}
