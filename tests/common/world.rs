use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cucumber::World;

use blogline::repl::{
    io::{MockEventStream, MockRenderStream},
    models::{Post, PostId},
    services::{ApiError, HttpBlogApi, MockBlogApi},
    AppController,
};
use std::sync::Arc;
use wiremock::MockServer;

pub type TestController = AppController<MockEventStream, MockRenderStream>;

/// Result of the last direct HTTP call made against the wiremock stub
#[derive(Debug)]
pub enum HttpOutcome {
    Listed(Vec<Post>),
    Done,
    Failed(ApiError),
}

/// State shared by the steps of one scenario
///
/// UI scenarios drive a real [`AppController`] with scripted keys against
/// an in-memory [`MockBlogApi`] and read the result off a
/// [`MockRenderStream`] screen. HTTP scenarios talk to a wiremock server
/// through [`HttpBlogApi`].
#[derive(World)]
#[world(init = Self::new)]
pub struct BloglineWorld {
    /// In-memory blog server the controller talks to
    pub api: MockBlogApi,

    /// Shared handle to the controller's screen
    pub screen: MockRenderStream,

    /// Controller, created by "blogline is running"
    pub controller: Option<TestController>,

    /// Stub server for HTTP-level scenarios
    pub mock_server: Option<MockServer>,

    pub http_outcome: Option<HttpOutcome>,
}

impl std::fmt::Debug for BloglineWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BloglineWorld")
            .field("server_posts", &self.api.posts())
            .field("running", &self.controller.is_some())
            .field("http_outcome", &self.http_outcome)
            .finish()
    }
}

impl BloglineWorld {
    pub fn new() -> Self {
        Self {
            api: MockBlogApi::new(),
            screen: MockRenderStream::with_size((80, 24)),
            controller: None,
            mock_server: None,
            http_outcome: None,
        }
    }

    /// Build the controller, run the initial fetch and render
    pub async fn start_app(&mut self) -> Result<()> {
        let mut controller = AppController::with_api(
            Arc::new(self.api.clone()),
            MockEventStream::empty(),
            self.screen.clone(),
        )?;
        controller
            .view_model_mut()
            .set_profile_name("default".to_string());
        controller.start();
        controller.settle().await?;
        self.controller = Some(controller);
        Ok(())
    }

    /// The running controller, starting it on first use
    pub async fn app(&mut self) -> &mut TestController {
        if self.controller.is_none() {
            self.start_app().await.expect("failed to start blogline");
        }
        self.controller.as_mut().expect("controller is running")
    }

    /// Send keys without waiting for background calls in between
    pub async fn press_keys_quickly(&mut self, keys: &[KeyEvent]) -> Result<()> {
        let app = self.app().await;
        for key in keys {
            app.process_key_event(*key)?;
        }
        app.settle().await
    }

    /// Send one key and wait for every call it triggered to finish
    pub async fn press(&mut self, key: &str) -> Result<()> {
        let key_event = parse_key(key)?;
        self.press_keys_quickly(&[key_event]).await
    }

    pub async fn type_text(&mut self, text: &str) -> Result<()> {
        let keys: Vec<KeyEvent> = text
            .chars()
            .map(|ch| KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
            .collect();
        self.press_keys_quickly(&keys).await
    }

    pub async fn mock_server(&mut self) -> &MockServer {
        if self.mock_server.is_none() {
            self.mock_server = Some(MockServer::start().await);
        }
        self.mock_server.as_ref().expect("mock server is running")
    }

    pub async fn http_api(&mut self) -> HttpBlogApi {
        let uri = self.mock_server().await.uri();
        HttpBlogApi::new(&uri).expect("wiremock uri is a valid base URL")
    }
}

pub fn post_id(id: u64) -> PostId {
    PostId::from(id)
}

/// Turn a key name from a feature file into a key event
pub fn parse_key(key: &str) -> Result<KeyEvent> {
    let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
    let ctrl = |ch| KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);

    let key_event = match key {
        "Enter" => plain(KeyCode::Enter),
        "Escape" | "Esc" => plain(KeyCode::Esc),
        "Backspace" => plain(KeyCode::Backspace),
        "Up" => plain(KeyCode::Up),
        "Down" => plain(KeyCode::Down),
        "Home" => plain(KeyCode::Home),
        "End" => plain(KeyCode::End),
        "Ctrl+C" => ctrl('c'),
        "Ctrl+D" => ctrl('d'),
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().unwrap_or(' ');
            plain(KeyCode::Char(ch))
        }
        _ => return Err(anyhow::anyhow!("Unknown key: {}", key)),
    };
    Ok(key_event)
}
