//! Step definitions for Cucumber tests
//!
//! - `application` - startup, key input, screen and lifecycle checks
//! - `posts` - post list, edit state and mock server state
//! - `http` - `HttpBlogApi` against a wiremock stub

pub mod application;
pub mod http;
pub mod posts;
