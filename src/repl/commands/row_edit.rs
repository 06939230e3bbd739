//! # Row Edit Commands
//!
//! Keys while the selected row's edit input has focus.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::form::printable_char;
use super::list::selection_direction;
use super::{Command, CommandContext, CommandEvent};
use crate::repl::events::Focus;

fn in_row_input(context: &CommandContext) -> bool {
    context.focus() == Focus::RowInput
}

/// Type a character into the row draft
pub struct EditInsertCharCommand;

impl Command for EditInsertCharCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_row_input(context) && printable_char(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(printable_char(&event)
            .map(|ch| vec![CommandEvent::EditCharInsertRequested { ch }])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "EditInsertChar"
    }
}

/// Remove the last character of the row draft
pub struct EditBackspaceCommand;

impl Command for EditBackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_row_input(context) && event.code == KeyCode::Backspace
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::EditBackspaceRequested])
    }

    fn name(&self) -> &'static str {
        "EditBackspace"
    }
}

/// Save the row draft (Enter)
pub struct UpdateSubmitCommand;

impl Command for UpdateSubmitCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_row_input(context) && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::UpdateSubmitRequested])
    }

    fn name(&self) -> &'static str {
        "UpdateSubmit"
    }
}

/// Delete the row being edited (Ctrl+D)
pub struct RowDeleteCommand;

impl Command for RowDeleteCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_row_input(context)
            && event.code == KeyCode::Char('d')
            && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::DeleteRequested])
    }

    fn name(&self) -> &'static str {
        "RowDelete"
    }
}

/// Stop typing into the row (Esc), or leave and move with Up/Down
///
/// The row stays in edit mode; there is no way to discard a row draft other
/// than a successful update.
pub struct RowLeaveCommand;

impl RowLeaveCommand {
    fn arrow(event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Up | KeyCode::Down) && event.modifiers.is_empty()
    }
}

impl Command for RowLeaveCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_row_input(context) && (event.code == KeyCode::Esc || Self::arrow(event))
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let mut events = vec![CommandEvent::EditFocusLeaveRequested];
        if Self::arrow(&event) {
            if let Some(direction) = selection_direction(&event) {
                events.push(CommandEvent::SelectionMoveRequested { direction });
            }
        }
        Ok(events)
    }

    fn name(&self) -> &'static str {
        "RowLeave"
    }
}
