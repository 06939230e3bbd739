//! # Blog Screen
//!
//! Terminal front end for the blog server, split Model / ViewModel / View /
//! Controller:
//!
//! - `models`: posts as the server sent them, plus client-only edit state
//! - `services`: the blog API and the background fetcher
//! - `view_models`: selection, focus, drafts; turns user actions into intents
//! - `commands`: key bindings
//! - `views` / `io`: rendering and the terminal seams
//! - `controllers`: the event loop

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};
pub use controllers::AppController;
pub use events::{Focus, SelectionDirection, ViewEvent};
pub use io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream};
pub use models::{CreateForm, Post, PostId, PostRow, PostStore, StatusLine};
pub use services::{
    ApiCall, ApiError, BlogApi, FetchOutcome, Fetcher, HttpBlogApi, Intent, MockBlogApi,
    Operation,
};
pub use view_models::ViewModel;
pub use views::{TerminalRenderer, ViewRenderer};
