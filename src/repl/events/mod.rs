//! # Events Module
//!
//! Re-exports the event types shared between commands, view model and views.

pub mod types;
pub mod view_events;

pub use types::{Focus, SelectionDirection};
pub use view_events::ViewEvent;
