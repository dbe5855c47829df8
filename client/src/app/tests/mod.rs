//! Orchestration tests against stub collaborators.

mod error_tests;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{App, AppDeps, Route};
use crate::config::{ClientConfig, RateKeyPolicy};
use crate::core::error::{AppError, Result};
use crate::core::service::{
    ConfirmDialog, HttpMethod, HttpRequest, HttpResponse, HttpTransport, Navigator, Notifier,
    TokenStore,
};
use crate::services::notifications::{Notification, NotificationKind};
use crate::services::storage::MemoryTokenStore;

pub const ORIGIN: &str = "http://backend.test";
pub const CURRENCY_API: &str = "http://currency.test/v1/latest";

pub fn backend(path: &str) -> String {
    format!("{}{}", ORIGIN, path)
}

/// Transport replaying canned responses keyed by method and URL.
///
/// Unrouted requests get a 404 with no body.
#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<(HttpMethod, String), Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn respond(&self, method: HttpMethod, url: impl Into<String>, status: u16, body: &str) {
        self.routes
            .lock()
            .insert((method, url.into()), Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, method: HttpMethod, url: impl Into<String>, reason: &str) {
        self.routes
            .lock()
            .insert((method, url.into()), Err(AppError::Transport(reason.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn requests_to(&self, url: &str) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.url == url)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let key = (request.method, request.url.clone());
        self.requests.lock().push(request);
        self.routes
            .lock()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse::new(404, "")))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }

    pub fn of_kind(&self, kind: NotificationKind) -> Vec<Notification> {
        self.seen
            .lock()
            .iter()
            .filter(|n| n.kind == kind)
            .cloned()
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.of_kind(NotificationKind::Success)
            .into_iter()
            .map(|n| n.title)
            .collect()
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.of_kind(NotificationKind::Error)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Push(Route),
    Redirect(Route),
}

#[derive(Default)]
pub struct RecordingNavigator {
    seen: Mutex<Vec<Nav>>,
}

impl RecordingNavigator {
    pub fn all(&self) -> Vec<Nav> {
        self.seen.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: Route) {
        self.seen.lock().push(Nav::Push(route));
    }

    fn redirect(&self, route: Route) {
        self.seen.lock().push(Nav::Redirect(route));
    }
}

pub struct ScriptedDialog {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedDialog {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl ConfirmDialog for ScriptedDialog {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().push(prompt.to_string());
        self.answer
    }
}

/// Token store whose writes always fail.
pub struct BrokenTokenStore;

impl TokenStore for BrokenTokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(AppError::Storage("disk unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(AppError::Storage("disk unavailable".to_string()))
    }

    fn clear(&self) -> Result<()> {
        Err(AppError::Storage("disk unavailable".to_string()))
    }
}

/// An [`App`] wired to stubs, with handles to every stub.
pub struct Harness {
    pub app: App,
    pub transport: Arc<StubTransport>,
    pub tokens: Arc<MemoryTokenStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub dialog: Arc<ScriptedDialog>,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(RateKeyPolicy::FixedUsd, true, None)
    }

    pub fn declining_dialog() -> Self {
        Self::build(RateKeyPolicy::FixedUsd, false, None)
    }

    pub fn with_rate_key(rate_key: RateKeyPolicy) -> Self {
        Self::build(rate_key, true, None)
    }

    /// Harness whose durable storage already holds a session token.
    pub fn logged_in(token: &str) -> Self {
        Self::build(RateKeyPolicy::FixedUsd, true, Some(token))
    }

    fn build(rate_key: RateKeyPolicy, confirm: bool, token: Option<&str>) -> Self {
        let transport = Arc::new(StubTransport::default());
        let tokens = Arc::new(MemoryTokenStore::new());
        if let Some(token) = token {
            tokens.set("access_token", token).unwrap();
        }
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let dialog = Arc::new(ScriptedDialog::answering(confirm));

        let config = ClientConfig::new(ORIGIN, "test-key")
            .with_currency_api_url(CURRENCY_API)
            .with_rate_key(rate_key);

        let app = App::new(AppDeps {
            config,
            transport: transport.clone(),
            tokens: tokens.clone(),
            notifier: notifier.clone(),
            navigator: navigator.clone(),
            dialog: dialog.clone(),
        });

        Self {
            app,
            transport,
            tokens,
            notifier,
            navigator,
            dialog,
        }
    }
}
