//! # Create Form Commands
//!
//! Keys while the create form has focus: text entry, submit and cancel.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::repl::events::Focus;

/// The character a key types, if it is plain (optionally shifted) text input
pub(crate) fn printable_char(event: &KeyEvent) -> Option<char> {
    match event.code {
        KeyCode::Char(ch) if (event.modifiers - KeyModifiers::SHIFT).is_empty() => Some(ch),
        _ => None,
    }
}

fn in_form(context: &CommandContext) -> bool {
    context.focus() == Focus::CreateForm
}

/// Type a character into the draft
pub struct CreateInsertCharCommand;

impl Command for CreateInsertCharCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_form(context) && printable_char(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(printable_char(&event)
            .map(|ch| vec![CommandEvent::CreateCharInsertRequested { ch }])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "CreateInsertChar"
    }
}

/// Remove the last draft character (Backspace)
pub struct CreateBackspaceCommand;

impl Command for CreateBackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_form(context) && event.code == KeyCode::Backspace
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CreateBackspaceRequested])
    }

    fn name(&self) -> &'static str {
        "CreateBackspace"
    }
}

/// Submit the draft (Enter)
pub struct CreateSubmitCommand;

impl Command for CreateSubmitCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_form(context) && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CreateSubmitRequested])
    }

    fn name(&self) -> &'static str {
        "CreateSubmit"
    }
}

/// Hide the form (Esc)
pub struct CreateCancelCommand;

impl Command for CreateCancelCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_form(context) && event.code == KeyCode::Esc
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CreateFormCancelRequested])
    }

    fn name(&self) -> &'static str {
        "CreateCancel"
    }
}
