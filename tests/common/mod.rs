//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use giftster::form::FormInput;
use giftster::service::{GiftOutcome, GiftService, ServiceError};
use giftster::ui::app::App;
use giftster::ui::events::AppEvent;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Fake service -------------------------------------------------------------

/// Canned reply from [`FakeService`].
#[derive(Debug, Clone)]
pub enum FakeReply {
    Result(String),
    Status(u16, String),
    Empty,
}

/// In-memory `GiftService` that records every input it receives.
pub struct FakeService {
    replies: Mutex<VecDeque<FakeReply>>,
    calls: Mutex<Vec<FormInput>>,
}

impl FakeService {
    pub fn new(replies: impl IntoIterator<Item = FakeReply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn succeeding(text: &str) -> Arc<Self> {
        Self::new([FakeReply::Result(text.to_string())])
    }

    pub fn calls(&self) -> Vec<FormInput> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GiftService for FakeService {
    fn name(&self) -> &str {
        "fake"
    }

    async fn generate(&self, input: &FormInput) -> GiftOutcome {
        self.calls.lock().unwrap().push(input.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(FakeReply::Empty);
        match reply {
            FakeReply::Result(text) => Ok(text),
            FakeReply::Status(status, body) => Err(ServiceError::Status { status, body }),
            FakeReply::Empty => Err(ServiceError::EmptyResult),
        }
    }
}

// -- App helpers --------------------------------------------------------------

/// Build an `App` on the current tokio runtime.
///
/// Returns the receiver that request outcomes are delivered on.
pub fn make_app(service: Arc<dyn GiftService>) -> (App, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let app = App::new(service, tx, tokio::runtime::Handle::current());
    (app, rx)
}

/// Wait for the in-flight request to finish and feed it to `app`.
///
/// Needs a multi-threaded runtime: the calling worker blocks while the
/// request task runs on another.
pub fn deliver_outcome(app: &mut App, rx: &Receiver<AppEvent>) {
    let event = tokio::task::block_in_place(|| rx.recv_timeout(Duration::from_secs(10)))
        .expect("request outcome not delivered");
    match event {
        AppEvent::Gifts(outcome) => app.on_gifts(outcome),
        _ => panic!("expected a Gifts event"),
    }
}
