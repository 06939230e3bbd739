//! # Command Implementations
//!
//! Key handling for the blog screen. Each [`Command`] decides whether a key
//! is meant for it given the current [`CommandContext`] and turns it into
//! [`CommandEvent`]s; the controller applies those to the view model.
//!
//! Commands are organized by where input is focused:
//! - `app`: keys that work everywhere (quit)
//! - `list`: navigating and acting on the post list
//! - `form`: typing into the create form
//! - `row_edit`: typing into a row that is in edit mode

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

pub mod app;
pub mod context;
pub mod events;
pub mod form;
pub mod list;
pub mod row_edit;

pub use app::*;
pub use context::{CommandContext, ViewModelSnapshot};
pub use events::CommandEvent;
pub use form::*;
pub use list::*;
pub use row_edit::*;

/// A single key binding
pub trait Command: Send + Sync {
    /// Whether this command handles `event` in the given context
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Turn the key into events describing what should happen
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Command name for debugging and logging
    fn name(&self) -> &'static str;
}

/// Registry that routes key events to the first relevant command
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with every default binding
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        // Order matters: global keys first, then focus-specific ones
        self.add_command(Box::new(AppTerminateCommand));

        self.add_command(Box::new(CreateSubmitCommand));
        self.add_command(Box::new(CreateCancelCommand));
        self.add_command(Box::new(CreateBackspaceCommand));
        self.add_command(Box::new(CreateInsertCharCommand));

        self.add_command(Box::new(UpdateSubmitCommand));
        self.add_command(Box::new(RowDeleteCommand));
        self.add_command(Box::new(RowLeaveCommand));
        self.add_command(Box::new(EditBackspaceCommand));
        self.add_command(Box::new(EditInsertCharCommand));

        self.add_command(Box::new(ListQuitCommand));
        self.add_command(Box::new(SelectionMoveCommand));
        self.add_command(Box::new(OpenCreateFormCommand));
        self.add_command(Box::new(EditSelectedCommand));
        self.add_command(Box::new(DeleteSelectedCommand));
        self.add_command(Box::new(RefreshCommand));
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Process a key event and return the events of the first matching command
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        // Windows reports key releases too; only presses act
        if event.kind == KeyEventKind::Release {
            return Ok(Vec::new());
        }

        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!(
                    "Command {} handles {:?} in {:?}",
                    command.name(),
                    event.code,
                    context.focus()
                );
                return command.execute(event, context);
            }
        }

        tracing::debug!(
            "No command for {:?} in {:?}",
            event.code,
            context.focus()
        );
        Ok(Vec::new())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{context, ctrl, key};
    use super::*;
    use crate::repl::events::{Focus, SelectionDirection};
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn registry_should_route_keys_by_focus() {
        let registry = CommandRegistry::new();

        let events = registry
            .process_event(key(KeyCode::Char('c')), &context(Focus::List))
            .unwrap();
        assert_eq!(events, vec![CommandEvent::CreateFormOpenRequested]);

        let events = registry
            .process_event(key(KeyCode::Char('c')), &context(Focus::CreateForm))
            .unwrap();
        assert_eq!(events, vec![CommandEvent::CreateCharInsertRequested { ch: 'c' }]);

        let events = registry
            .process_event(key(KeyCode::Char('c')), &context(Focus::RowInput))
            .unwrap();
        assert_eq!(events, vec![CommandEvent::EditCharInsertRequested { ch: 'c' }]);
    }

    #[test]
    fn ctrl_c_should_quit_from_any_focus() {
        let registry = CommandRegistry::new();
        for focus in [Focus::List, Focus::CreateForm, Focus::RowInput] {
            let events = registry.process_event(ctrl('c'), &context(focus)).unwrap();
            assert_eq!(events, vec![CommandEvent::QuitRequested]);
        }
    }

    #[test]
    fn q_should_only_quit_from_list() {
        let registry = CommandRegistry::new();
        let events = registry
            .process_event(key(KeyCode::Char('q')), &context(Focus::CreateForm))
            .unwrap();
        assert_eq!(events, vec![CommandEvent::CreateCharInsertRequested { ch: 'q' }]);
    }

    #[test]
    fn enter_should_submit_in_input_focuses() {
        let registry = CommandRegistry::new();
        let events = registry
            .process_event(key(KeyCode::Enter), &context(Focus::CreateForm))
            .unwrap();
        assert_eq!(events, vec![CommandEvent::CreateSubmitRequested]);

        let events = registry
            .process_event(key(KeyCode::Enter), &context(Focus::RowInput))
            .unwrap();
        assert_eq!(events, vec![CommandEvent::UpdateSubmitRequested]);
    }

    #[test]
    fn arrows_in_row_input_should_leave_and_move() {
        let registry = CommandRegistry::new();
        let events = registry
            .process_event(key(KeyCode::Down), &context(Focus::RowInput))
            .unwrap();
        assert_eq!(
            events,
            vec![
                CommandEvent::EditFocusLeaveRequested,
                CommandEvent::SelectionMoveRequested {
                    direction: SelectionDirection::Down
                }
            ]
        );
    }

    #[test]
    fn key_release_should_be_ignored() {
        let registry = CommandRegistry::new();
        let release = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        let events = registry.process_event(release, &context(Focus::List)).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn unknown_key_should_produce_nothing() {
        let registry = CommandRegistry::new();
        let events = registry
            .process_event(key(KeyCode::F(5)), &context(Focus::List))
            .unwrap();
        assert!(events.is_empty());
        assert!(registry.command_count() > 10);
    }
}
