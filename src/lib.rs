//! # blogline - Terminal Client for a Blog CRUD Server
//!
//! Lists, creates, edits and deletes blog posts on a small REST server
//! (`/blog/getAll`, `/blog/create`, `/blog/update/{id}`, `/blog/delete/{id}`).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Intents   ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │─────────────▶│ Fetcher  │
//! │             │              │              │◄─────────────│          │
//! │ - Terminal  │              │ - Selection  │   Outcomes   │ - BlogApi│
//! │ - Rendering │              │ - Drafts     │              │ - tokio  │
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                      ▲
//!                                      │ Commands
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │ - Key map    │
//!                               │ - Event Loop │
//!                               └──────────────┘
//! ```
//!
//! The post list is never edited locally: every successful write is followed
//! by a full refetch that replaces it.

pub mod cmd_args;
pub mod config;
pub mod logging;
pub mod repl;

pub use repl::*;
