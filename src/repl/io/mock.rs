//! # Mock I/O Implementations for Testing
//!
//! [`MockEventStream`] replays a scripted key sequence. [`MockRenderStream`]
//! records every render command and keeps a small in-memory screen (it
//! understands cursor moves, clears and plain text; other escape sequences
//! are dropped) so tests can assert on what the user would see.
//!
//! The render stream is cheaply cloneable and clones share one screen, so a
//! test can keep a handle after moving the stream into the controller.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Scripted event stream
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    GetSize,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(String),
    Flush,
}

#[derive(Debug, Default)]
enum Escape {
    #[default]
    Text,
    Esc,
    Csi(String),
}

#[derive(Debug)]
struct Screen {
    commands: Vec<RenderCommand>,
    lines: Vec<Vec<char>>,
    cursor: (u16, u16),
    escape: Escape,
    size: TerminalSize,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
}

impl Screen {
    fn new(size: TerminalSize) -> Self {
        Self {
            commands: Vec::new(),
            lines: vec![Vec::new(); size.1 as usize],
            cursor: (0, 0),
            escape: Escape::Text,
            size,
            cursor_visible: true,
            raw_mode: false,
            alternate_screen: false,
        }
    }

    fn clear(&mut self) {
        self.lines.iter_mut().for_each(Vec::clear);
    }

    fn resize(&mut self, size: TerminalSize) {
        self.size = size;
        self.lines.resize(size.1 as usize, Vec::new());
    }

    fn feed(&mut self, text: &str) {
        for ch in text.chars() {
            match std::mem::take(&mut self.escape) {
                Escape::Text if ch == '\x1b' => self.escape = Escape::Esc,
                Escape::Text => self.put(ch),
                Escape::Esc if ch == '[' => self.escape = Escape::Csi(String::new()),
                // Two-byte escapes (ESC 7, ESC 8, ...) carry no text
                Escape::Esc => {}
                Escape::Csi(params) if ('\x40'..='\x7e').contains(&ch) => self.csi(&params, ch),
                Escape::Csi(mut params) => {
                    params.push(ch);
                    self.escape = Escape::Csi(params);
                }
            }
        }
    }

    fn put(&mut self, ch: char) {
        match ch {
            '\n' => self.cursor = (0, self.cursor.1.saturating_add(1)),
            '\r' => self.cursor.0 = 0,
            _ => {
                let x = self.cursor.0 as usize;
                if let Some(line) = self.lines.get_mut(self.cursor.1 as usize) {
                    if line.len() < x {
                        line.resize(x, ' ');
                    }
                    if x < line.len() {
                        line[x] = ch;
                    } else {
                        line.push(ch);
                    }
                }
                self.cursor.0 = self.cursor.0.saturating_add(1);
            }
        }
    }

    fn csi(&mut self, params: &str, action: char) {
        match action {
            'H' => {
                let mut parts = params.split(';').map(|p| p.parse::<u16>().unwrap_or(1));
                let row = parts.next().unwrap_or(1);
                let col = parts.next().unwrap_or(1);
                self.cursor = (col.saturating_sub(1), row.saturating_sub(1));
            }
            'K' if params.is_empty() || params == "0" => {
                let x = self.cursor.0 as usize;
                if let Some(line) = self.lines.get_mut(self.cursor.1 as usize) {
                    line.truncate(x);
                }
            }
            'J' if params == "2" => self.clear(),
            _ => {}
        }
    }
}

/// Render stream that draws into an in-memory screen
#[derive(Clone)]
pub struct MockRenderStream {
    screen: Arc<Mutex<Screen>>,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::new(size))),
        }
    }

    fn screen(&self) -> MutexGuard<'_, Screen> {
        self.screen.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, command: RenderCommand) {
        self.screen().commands.push(command);
    }

    /// Change the size reported by `get_size`
    pub fn set_size(&self, size: TerminalSize) {
        self.screen().resize(size);
    }

    pub fn get_commands(&self) -> Vec<RenderCommand> {
        self.screen().commands.clone()
    }

    pub fn clear_commands(&self) {
        self.screen().commands.clear();
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.screen().commands.contains(command)
    }

    /// Screen rows with trailing blanks trimmed
    pub fn screen_lines(&self) -> Vec<String> {
        self.screen()
            .lines
            .iter()
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    pub fn line(&self, row: u16) -> String {
        self.screen_lines()
            .into_iter()
            .nth(row as usize)
            .unwrap_or_default()
    }

    pub fn screen_text(&self) -> String {
        self.screen_lines().join("\n")
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.screen_lines().iter().any(|line| line.contains(needle))
    }

    /// Index of the first row containing `needle`
    pub fn find_row(&self, needle: &str) -> Option<usize> {
        self.screen_lines()
            .iter()
            .position(|line| line.contains(needle))
    }

    pub fn cursor_position(&self) -> (u16, u16) {
        self.screen().cursor
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.screen().cursor_visible
    }

    pub fn is_raw_mode(&self) -> bool {
        self.screen().raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.screen().alternate_screen
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let text = String::from_utf8_lossy(buf).into_owned();
        let mut screen = self.screen();
        screen.feed(&text);
        screen.commands.push(RenderCommand::Write(text));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.commands.push(RenderCommand::ClearScreen);
        screen.clear();
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        let mut screen = self.screen();
        screen.commands.push(RenderCommand::MoveCursor(x, y));
        screen.cursor = (x, y);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.commands.push(RenderCommand::HideCursor);
        screen.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.commands.push(RenderCommand::ShowCursor);
        screen.cursor_visible = true;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        let mut screen = self.screen();
        screen.commands.push(RenderCommand::GetSize);
        Ok(screen.size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.commands.push(RenderCommand::EnterAlternateScreen);
        screen.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.commands.push(RenderCommand::LeaveAlternateScreen);
        screen.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.commands.push(RenderCommand::EnableRawMode);
        screen.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.commands.push(RenderCommand::DisableRawMode);
        screen.raw_mode = false;
        Ok(())
    }
}

impl Default for MockEventStream {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}
