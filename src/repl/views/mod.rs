//! # Views Module
//!
//! Rendering of the blog screen.

pub mod terminal_renderer;

pub use terminal_renderer::{TerminalRenderer, ViewRenderer, TITLE};
