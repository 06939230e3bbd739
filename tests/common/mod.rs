//! Common test utilities and infrastructure
//!
//! - Cucumber world implementation
//! - Key name parsing for feature files

pub mod world;

pub use world::BloglineWorld;
