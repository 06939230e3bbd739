//! # ViewModel Module
//!
//! Modular ViewModel implementation split into focused responsibilities.

mod core;
mod form_manager;
mod outcome_manager;
mod post_manager;


pub use self::core::ViewModel;
