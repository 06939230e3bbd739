//! # crossterm Streams
//!
//! The only place that touches the real terminal. Keys come from
//! `crossterm::event`; output goes to stdout.
//!
//! Cursor moves and visibility are queued and reach the screen on the
//! renderer's flush, so one frame is one write. Screen-mode switches are
//! executed immediately.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, Command};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Key and resize events from the user's terminal
#[derive(Debug, Default)]
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// Blog screen output on stdout
#[derive(Debug)]
pub struct TerminalRenderStream {
    stdout: Stdout,
}

impl TerminalRenderStream {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    fn queue_command(&mut self, command: impl Command) -> Result<()> {
        Ok(queue!(self.stdout, command)?)
    }

    fn execute_command(&mut self, command: impl Command) -> Result<()> {
        Ok(execute!(self.stdout, command)?)
    }
}

impl Default for TerminalRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for TerminalRenderStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl RenderStream for TerminalRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.queue_command(Clear(ClearType::All))
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.queue_command(cursor::MoveTo(x, y))
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.queue_command(cursor::Hide)
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.queue_command(cursor::Show)
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(terminal::size()?)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.execute_command(EnterAlternateScreen)
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.execute_command(LeaveAlternateScreen)
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        Ok(terminal::enable_raw_mode()?)
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        Ok(terminal::disable_raw_mode()?)
    }
}
