//! # Services Layer
//!
//! Everything that talks to the blog server.
//!
//! - [`BlogApi`]: the four-call contract, implemented by [`HttpBlogApi`]
//!   for real servers and [`MockBlogApi`] for tests
//! - [`Fetcher`]: runs calls in the background and reports [`FetchOutcome`]s

pub mod blog_api;
pub mod fetcher;
pub mod http;
pub mod mock;

pub use blog_api::{ApiError, BlogApi, Operation};
pub use fetcher::{FetchOutcome, Fetcher, Intent};
pub use http::HttpBlogApi;
pub use mock::{ApiCall, MockBlogApi};
