//! # Post List Commands
//!
//! Keys while the list has focus: selection movement and per-post actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::repl::events::{Focus, SelectionDirection};

fn in_list(context: &CommandContext) -> bool {
    context.focus() == Focus::List
}

/// Plain key with no modifiers (shift allowed for letters like `G`)
fn plain(event: &KeyEvent, code: KeyCode) -> bool {
    event.code == code && (event.modifiers - KeyModifiers::SHIFT).is_empty()
}

pub(crate) fn selection_direction(event: &KeyEvent) -> Option<SelectionDirection> {
    if !(event.modifiers - KeyModifiers::SHIFT).is_empty() {
        return None;
    }
    match event.code {
        KeyCode::Up | KeyCode::Char('k') => Some(SelectionDirection::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(SelectionDirection::Down),
        KeyCode::Home | KeyCode::Char('g') => Some(SelectionDirection::First),
        KeyCode::End | KeyCode::Char('G') => Some(SelectionDirection::Last),
        _ => None,
    }
}

/// Quit with `q`
pub struct ListQuitCommand;

impl Command for ListQuitCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_list(context) && plain(event, KeyCode::Char('q'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "ListQuit"
    }
}

/// Move the selection (j/k, arrows, g/G, Home/End)
pub struct SelectionMoveCommand;

impl Command for SelectionMoveCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_list(context) && selection_direction(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(selection_direction(&event)
            .map(|direction| vec![CommandEvent::SelectionMoveRequested { direction }])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "SelectionMove"
    }
}

/// Show the create form (`c`)
pub struct OpenCreateFormCommand;

impl Command for OpenCreateFormCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_list(context) && plain(event, KeyCode::Char('c'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CreateFormOpenRequested])
    }

    fn name(&self) -> &'static str {
        "OpenCreateForm"
    }
}

/// Edit the selected post (`e` or Enter)
pub struct EditSelectedCommand;

impl Command for EditSelectedCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_list(context)
            && context.state.has_selection
            && (plain(event, KeyCode::Char('e')) || plain(event, KeyCode::Enter))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::EditRequested])
    }

    fn name(&self) -> &'static str {
        "EditSelected"
    }
}

/// Delete the selected post (`d`)
pub struct DeleteSelectedCommand;

impl Command for DeleteSelectedCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_list(context) && context.state.has_selection && plain(event, KeyCode::Char('d'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::DeleteRequested])
    }

    fn name(&self) -> &'static str {
        "DeleteSelected"
    }
}

/// Reload the list from the server (`r`)
pub struct RefreshCommand;

impl Command for RefreshCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_list(context) && plain(event, KeyCode::Char('r'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::RefreshRequested])
    }

    fn name(&self) -> &'static str {
        "Refresh"
    }
}
