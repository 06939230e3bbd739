//! # Terminal Renderer
//!
//! Draws the blog screen from a [`ViewModel`]:
//!
//! ```text
//! row 0        BLOG SPRING BOOT
//! row 1        key hints for the current focus
//! row 2        "> draft" while the create form is visible
//! row 4..      one two-row card per post
//! last row     status bar
//! ```
//!
//! The renderer owns the [`RenderStream`]; the controller decides which
//! parts to redraw from the view events it collects.

use crate::repl::events::Focus;
use crate::repl::io::{RenderStream, TerminalSize};
use crate::repl::models::PostRow;
use crate::repl::view_models::ViewModel;
use anyhow::Result;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;
use unicode_width::UnicodeWidthChar;

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! queue_term {
    ($($arg:expr),* $(,)?) => {
        queue!($($arg),*).map_err(anyhow::Error::from)
    };
}

pub const TITLE: &str = "BLOG SPRING BOOT";

const HEADER_ROW: u16 = 0;
const HINT_ROW: u16 = 1;
const FORM_ROW: u16 = 2;
const LIST_TOP: u16 = 4;
const CARD_HEIGHT: u16 = 2;

const FORM_PROMPT: &str = "> ";
const CARD_INDENT: &str = "    ";
const ROW_INPUT_PROMPT: &str = "    > ";
const EDITING_SUFFIX: &str = " (editing)";

/// Terminal columns taken by `ch` (2 for CJK and most emoji)
fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Terminal columns taken by `text`
fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Longest prefix of `text` that fits in `max_width` columns
///
/// A wide character that would straddle the edge is dropped whole.
fn fit_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        used += char_width(ch);
        if used > max_width {
            return &text[..index];
        }
    }
    text
}

/// Trait for rendering views
pub trait ViewRenderer {
    /// Prepare the terminal (raw mode, alternate screen)
    fn initialize(&mut self) -> Result<()>;

    /// Redraw everything
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Redraw hints, form and post list
    fn render_content(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Redraw the bottom status bar
    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// crossterm renderer over any [`RenderStream`]
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: TerminalSize,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.terminal_size
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    fn width(&self) -> usize {
        self.terminal_size.0 as usize
    }

    fn status_row(&self) -> u16 {
        self.terminal_size.1.saturating_sub(1)
    }

    /// How many cards fit between the list top and the status bar
    fn cards_per_page(&self) -> usize {
        let rows = self.status_row().saturating_sub(LIST_TOP);
        ((rows / CARD_HEIGHT) as usize).max(1)
    }

    /// First card shown so that the selection stays on screen
    fn first_visible_card(&self, view_model: &ViewModel) -> usize {
        let per_page = self.cards_per_page();
        match view_model.selected_index() {
            Some(selected) if selected >= per_page => selected + 1 - per_page,
            _ => 0,
        }
    }

    fn truncate<'a>(&self, text: &'a str) -> &'a str {
        fit_to_width(text, self.width())
    }

    /// Write `text` at the start of `row` and clear the rest of the line
    fn write_line(&mut self, row: u16, text: &str) -> Result<()> {
        let text = self.truncate(text);
        self.render_stream.move_cursor(0, row)?;
        queue_term!(
            self.render_stream,
            Print(text),
            Clear(ClearType::UntilNewLine)
        )
    }

    fn render_header(&mut self) -> Result<()> {
        self.render_stream.move_cursor(0, HEADER_ROW)?;
        queue_term!(
            self.render_stream,
            SetAttribute(Attribute::Bold),
            Print(TITLE),
            SetAttribute(Attribute::Reset),
            Clear(ClearType::UntilNewLine)
        )
    }

    fn render_hints(&mut self, view_model: &ViewModel) -> Result<()> {
        let hints = match view_model.focus() {
            Focus::List => "c new  e edit  d delete  r refresh  j/k move  q quit",
            Focus::CreateForm => "Enter create  Esc cancel",
            Focus::RowInput => "Enter update  Ctrl-D delete  Esc leave",
        };
        let hints = self.truncate(hints);
        self.render_stream.move_cursor(0, HINT_ROW)?;
        queue_term!(
            self.render_stream,
            SetForegroundColor(Color::DarkGrey),
            Print(hints),
            ResetColor,
            Clear(ClearType::UntilNewLine)
        )
    }

    fn render_form(&mut self, view_model: &ViewModel) -> Result<()> {
        if view_model.is_create_form_visible() {
            let line = format!("{FORM_PROMPT}{}", view_model.new_entry());
            self.write_line(FORM_ROW, &line)
        } else {
            self.write_line(FORM_ROW, "")
        }
    }

    fn render_card(&mut self, row: u16, post_row: &PostRow<'_>, selected: bool) -> Result<()> {
        let marker = if selected { "▶ " } else { "  " };
        let suffix = if post_row.editing { EDITING_SUFFIX } else { "" };
        let full_title = format!("{marker}Blog Post #{}{suffix}", post_row.post.id);
        let title = self.truncate(&full_title);
        // The suffix keeps its own colour, so split it back off after fitting
        let split = title.len().min(full_title.len() - suffix.len());
        let (name, suffix) = title.split_at(split);

        self.render_stream.move_cursor(0, row)?;
        if selected {
            queue_term!(self.render_stream, SetAttribute(Attribute::Reverse))?;
        }
        queue_term!(self.render_stream, Print(name))?;
        if !suffix.is_empty() {
            queue_term!(
                self.render_stream,
                SetForegroundColor(Color::Yellow),
                Print(suffix),
                ResetColor
            )?;
        }
        queue_term!(
            self.render_stream,
            SetAttribute(Attribute::Reset),
            Clear(ClearType::UntilNewLine)
        )?;

        let body = if post_row.editing {
            format!("{ROW_INPUT_PROMPT}{}", post_row.updated_entry)
        } else {
            format!("{CARD_INDENT}{}", post_row.post.entry)
        };
        self.write_line(row + 1, &body)
    }

    fn render_list(&mut self, view_model: &ViewModel) -> Result<()> {
        let status_row = self.status_row();
        let first = self.first_visible_card(view_model);
        let selected = view_model.selected_index();
        let mut row = LIST_TOP;

        if view_model.post_count() == 0 {
            self.write_line(row, "  No posts yet. Press c to write one.")?;
            row += 1;
        } else {
            let rows: Vec<PostRow<'_>> = view_model
                .rows()
                .skip(first)
                .take(self.cards_per_page())
                .collect();
            for (offset, post_row) in rows.iter().enumerate() {
                if row + CARD_HEIGHT > status_row {
                    break;
                }
                self.render_card(row, post_row, selected == Some(first + offset))?;
                row += CARD_HEIGHT;
            }
        }

        // Blank out whatever the previous frame left below the list
        while row < status_row {
            self.write_line(row, "")?;
            row += 1;
        }
        Ok(())
    }

    /// Show the cursor at the end of the focused input, hide it otherwise
    fn place_cursor(&mut self, view_model: &ViewModel) -> Result<()> {
        let position = match view_model.focus() {
            Focus::List => None,
            Focus::CreateForm => {
                let col = display_width(FORM_PROMPT) + display_width(view_model.new_entry());
                Some((col, FORM_ROW))
            }
            Focus::RowInput => view_model.selected_row().and_then(|row| {
                let index = view_model.selected_index()?;
                let first = self.first_visible_card(view_model);
                let card = u16::try_from(index.checked_sub(first)?).ok()?;
                let col = display_width(ROW_INPUT_PROMPT) + display_width(row.updated_entry);
                Some((col, LIST_TOP + card * CARD_HEIGHT + 1))
            }),
        };

        match position {
            Some((col, row)) => {
                let max_col = self.width().saturating_sub(1);
                let col = u16::try_from(col.min(max_col)).unwrap_or(u16::MAX);
                self.render_stream.move_cursor(col, row)?;
                self.render_stream.show_cursor()
            }
            None => self.render_stream.hide_cursor(),
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.render_stream.flush().map_err(anyhow::Error::from)
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;

        self.render_header()?;
        self.render_hints(view_model)?;
        self.render_form(view_model)?;
        self.render_list(view_model)?;
        self.render_status_bar(view_model)?;

        self.place_cursor(view_model)?;
        self.flush()
    }

    fn render_content(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_stream.hide_cursor()?;

        self.render_hints(view_model)?;
        self.render_form(view_model)?;
        self.render_list(view_model)?;

        self.place_cursor(view_model)?;
        self.flush()
    }

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let status = view_model.status_line();
        let text = format!(" {} | {}", status.mode_label(), status.summary());
        let text = self.truncate(&text);
        let padding = self.width().saturating_sub(display_width(text));
        let row = self.status_row();

        self.render_stream.move_cursor(0, row)?;
        queue_term!(
            self.render_stream,
            SetAttribute(Attribute::Reverse),
            Print(text),
            Print(" ".repeat(padding)),
            SetAttribute(Attribute::Reset)
        )?;

        self.place_cursor(view_model)?;
        self.flush()
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.clear_screen()?;
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        self.flush()
    }
}
