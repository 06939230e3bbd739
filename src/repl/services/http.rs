//! # HTTP Service
//!
//! [`BlogApi`] implementation that talks to a real server over reqwest.

use super::blog_api::{ApiError, BlogApi, Operation};
use crate::repl::models::{EntryPayload, Post, PostId};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};

const LIST_PATH: &str = "blog/getAll";
const CREATE_PATH: &str = "blog/create";
const UPDATE_PATH: &str = "blog/update/";
const DELETE_PATH: &str = "blog/delete/";

/// Blog API client bound to one server base URL
#[derive(Debug, Clone)]
pub struct HttpBlogApi {
    client: Client,
    base_url: Url,
}

impl HttpBlogApi {
    /// Create a client for the server at `base_url`
    ///
    /// A base URL with a path prefix (`http://host/api`) keeps that prefix;
    /// endpoint paths are resolved underneath it.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        tracing::debug!("Creating HttpBlogApi for {}", base_url);
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .user_agent(concat!("blogline/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            message: e.to_string(),
        })
    }

    /// Endpoint with the post id appended as its own path segment
    fn endpoint_for(&self, prefix: &str, id: &PostId) -> Result<Url, ApiError> {
        let mut url = self.endpoint(prefix)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    async fn send(
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;

        let status = response.status();
        tracing::debug!("{} request answered with {}", operation, status);
        if !status.is_success() {
            return Err(ApiError::Status {
                operation,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

fn normalize_base_url(base_url: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(base_url.trim()).map_err(|e| ApiError::InvalidUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl {
            url: base_url.to_string(),
            message: "URL cannot be used as a base".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.endpoint(LIST_PATH)?;
        let response = Self::send(Operation::List, self.client.get(url)).await?;

        response
            .json::<Vec<Post>>()
            .await
            .map_err(|e| ApiError::Decode {
                operation: Operation::List,
                message: e.to_string(),
            })
    }

    async fn create_post(&self, entry: &str) -> Result<(), ApiError> {
        let url = self.endpoint(CREATE_PATH)?;
        let request = self.client.post(url).json(&EntryPayload { entry });
        Self::send(Operation::Create, request).await?;
        Ok(())
    }

    async fn update_post(&self, id: &PostId, entry: &str) -> Result<(), ApiError> {
        let url = self.endpoint_for(UPDATE_PATH, id)?;
        let request = self.client.post(url).json(&EntryPayload { entry });
        Self::send(Operation::Update, request).await?;
        Ok(())
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), ApiError> {
        let url = self.endpoint_for(DELETE_PATH, id)?;
        Self::send(Operation::Delete, self.client.post(url)).await?;
        Ok(())
    }
}
