//! # View Events
//!
//! Events related to view updates.
//! These events drive UI refreshing so the controller can avoid full redraws.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Full screen redraw required (most expensive - terminal resize, etc)
    FullRedrawRequired,

    /// The form and post cards need redrawing
    ContentRedrawRequired,

    /// Status bar needs updating
    StatusBarUpdateRequired,
}

impl ViewEvent {
    /// Relative cost, used to collapse a batch down to the cheapest covering redraw
    pub fn weight(&self) -> u8 {
        match self {
            ViewEvent::FullRedrawRequired => 2,
            ViewEvent::ContentRedrawRequired => 1,
            ViewEvent::StatusBarUpdateRequired => 0,
        }
    }
}
