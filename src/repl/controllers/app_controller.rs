//! # Application Controller
//!
//! Owns the event loop. Keys go through the command registry, the resulting
//! command events are applied to the view model, any API work is handed to
//! the [`Fetcher`], and finished calls are fed back into the view model.
//! Rendering is driven by the view events the view model leaves behind.

use crate::repl::{
    commands::{CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot},
    events::ViewEvent,
    io::{EventStream, RenderStream},
    services::{BlogApi, Fetcher, HttpBlogApi, Intent},
    view_models::ViewModel,
    views::{TerminalRenderer, ViewRenderer},
};
use crate::{
    cmd_args::CommandLineArgs,
    config::{self, IniProfileStore},
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for input before checking on background calls
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    fetcher: Fetcher,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Build a controller talking to the server chosen by profile and flags
    pub fn with_io_streams(
        cmd_args: CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let profile_name = cmd_args.profile();
        let profile_path = config::get_profile_path();
        tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);
        let profile = IniProfileStore::new(profile_path.as_str()).load_or_blank(profile_name)?;

        let server = config::resolve_server(cmd_args.server(), &profile);
        tracing::info!("Using blog server {}", server);
        let api = HttpBlogApi::new(&server)?;

        let mut controller = Self::with_api(Arc::new(api), event_stream, render_stream)?;
        controller.view_model.set_profile_name(profile_name.to_string());
        controller.view_model.set_server(&server);
        Ok(controller)
    }

    /// Build a controller over any [`BlogApi`] implementation
    pub fn with_api(api: Arc<dyn BlogApi>, event_stream: ES, render_stream: RS) -> Result<Self> {
        let mut view_model = ViewModel::new();
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            fetcher: Fetcher::new(api),
            event_stream,
            should_quit: false,
        })
    }

    /// Run until the user quits; the terminal is restored even on error
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.start();
        self.view_renderer.render_full(&self.view_model)?;

        let result = self.event_loop().await;

        self.view_renderer.cleanup()?;
        result
    }

    /// Issue the initial list fetch
    pub fn start(&mut self) {
        self.fetcher.dispatch(Intent::Refresh);
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            if self.event_stream.poll(POLL_INTERVAL)? {
                match self.event_stream.read()? {
                    Event::Key(key_event) => {
                        tracing::debug!("Received key event: {:?}", key_event);
                        self.handle_key_event(key_event);
                    }
                    Event::Resize(width, height) => {
                        self.view_model.update_terminal_size(width, height);
                        self.view_renderer.update_size(width, height);
                    }
                    _ => {}
                }
            }

            self.drain_outcomes();

            if !self.should_quit {
                let view_events = self.view_model.collect_pending_view_events();
                self.process_view_events(view_events)?;
            }

            // Let spawned API calls progress on a current-thread runtime
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));

        match self.command_registry.process_event(key_event, &context) {
            Ok(events) => {
                if !events.is_empty() {
                    tracing::debug!("Command events generated: {:?}", events);
                }
                for event in events {
                    self.apply_command_event(event);
                }
            }
            Err(e) => tracing::warn!("Failed to process key event {:?}: {}", key_event, e),
        }
    }

    /// Apply a command event to the view model, dispatching any API work
    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::CreateFormOpenRequested => self.view_model.open_create_form(),
            CommandEvent::CreateFormCancelRequested => self.view_model.cancel_create_form(),
            CommandEvent::CreateCharInsertRequested { ch } => {
                self.view_model.insert_create_char(ch)
            }
            CommandEvent::CreateBackspaceRequested => self.view_model.backspace_create(),
            CommandEvent::CreateSubmitRequested => {
                let intent = self.view_model.submit_create();
                self.fetcher.dispatch(intent);
            }
            CommandEvent::SelectionMoveRequested { direction } => {
                self.view_model.move_selection(direction)
            }
            CommandEvent::EditRequested => self.view_model.edit_selected(),
            CommandEvent::EditCharInsertRequested { ch } => self.view_model.insert_edit_char(ch),
            CommandEvent::EditBackspaceRequested => self.view_model.backspace_edit(),
            CommandEvent::EditFocusLeaveRequested => self.view_model.leave_row_input(),
            CommandEvent::UpdateSubmitRequested => {
                if let Some(intent) = self.view_model.submit_update_selected() {
                    self.fetcher.dispatch(intent);
                }
            }
            CommandEvent::DeleteRequested => {
                if let Some(intent) = self.view_model.delete_selected() {
                    self.fetcher.dispatch(intent);
                }
            }
            CommandEvent::RefreshRequested => {
                let intent = self.view_model.refresh();
                self.fetcher.dispatch(intent);
            }
            CommandEvent::QuitRequested => self.should_quit = true,
        }
    }

    /// Apply every outcome that has already arrived, without waiting
    fn drain_outcomes(&mut self) {
        while let Some(outcome) = self.fetcher.poll_outcome() {
            if let Some(follow_up) = self.view_model.apply_outcome(outcome) {
                self.fetcher.dispatch(follow_up);
            }
        }
    }

    /// Collapse a batch of view events into the cheapest covering redraw
    fn process_view_events(&mut self, view_events: Vec<ViewEvent>) -> Result<()> {
        let Some(strongest) = view_events.iter().max_by_key(|event| event.weight()) else {
            return Ok(());
        };

        match strongest {
            ViewEvent::FullRedrawRequired => self.view_renderer.render_full(&self.view_model),
            ViewEvent::ContentRedrawRequired => {
                self.view_renderer.render_content(&self.view_model)?;
                if view_events.contains(&ViewEvent::StatusBarUpdateRequired) {
                    self.view_renderer.render_status_bar(&self.view_model)?;
                }
                Ok(())
            }
            ViewEvent::StatusBarUpdateRequired => {
                self.view_renderer.render_status_bar(&self.view_model)
            }
        }
    }

    /// Process a single key event without running the event loop (for testing)
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        self.handle_key_event(key_event);
        self.drain_outcomes();
        let view_events = self.view_model.collect_pending_view_events();
        self.process_view_events(view_events)
    }

    /// Wait until every background call, including follow-up refetches, has
    /// finished and been applied, then render (for testing)
    pub async fn settle(&mut self) -> Result<()> {
        while let Some(outcome) = self.fetcher.next_outcome().await {
            if let Some(follow_up) = self.view_model.apply_outcome(outcome) {
                self.fetcher.dispatch(follow_up);
            }
        }
        let view_events = self.view_model.collect_pending_view_events();
        self.process_view_events(view_events)
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut ViewModel {
        &mut self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
