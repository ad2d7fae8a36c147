//! Shared fakes for unit tests: scripted transport, recording notifier,
//! and a session-store harness wired to in-memory storage.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;

use crate::error::SessionError;
use crate::net::api::{ApiClient, ApiRequest, HttpReply, Transport};
use crate::state::session::{SessionStore, StorageKeys};
use crate::state::toast::{Notifier, Toast};
use crate::util::storage::MemoryStorage;

pub const TEST_NAMESPACE: &str = "test";

// =========================================================================
// StubTransport
// =========================================================================

/// Replays scripted replies in order and records every request.
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<Result<HttpReply, SessionError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(HttpReply { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, reason: &str) -> Self {
        self.replies.lock().unwrap().push_back(Err(SessionError::Network(reason.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpReply, SessionError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SessionError::Network("no scripted reply".to_owned())))
    }
}

// =========================================================================
// GatedTransport
// =========================================================================

/// Each request waits until the test releases its gate.
#[derive(Default)]
pub struct GatedTransport {
    gates: Mutex<VecDeque<oneshot::Receiver<HttpReply>>>,
}

impl GatedTransport {
    /// Add a gate and return the sender that releases it.
    pub fn gate(&self) -> oneshot::Sender<HttpReply> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, _request: ApiRequest) -> Result<HttpReply, SessionError> {
        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(rx) => rx.await.map_err(|_| SessionError::Network("gate dropped".to_owned())),
            None => Err(SessionError::Network("no gate".to_owned())),
        }
    }
}

// =========================================================================
// RecordingNotifier
// =========================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.toasts().into_iter().map(|t| t.title).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}

// =========================================================================
// Harness
// =========================================================================

pub struct Harness {
    pub store: SessionStore,
    pub storage: Arc<MemoryStorage>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn keys() -> StorageKeys {
    StorageKeys::for_namespace(TEST_NAMESPACE)
}

pub fn harness(transport: Arc<dyn Transport>) -> Harness {
    harness_with_storage(transport, Arc::new(MemoryStorage::new()))
}

pub fn harness_with_storage(transport: Arc<dyn Transport>, storage: Arc<MemoryStorage>) -> Harness {
    let notifier = Arc::new(RecordingNotifier::default());
    let store = SessionStore::new(ApiClient::new(transport), storage.clone(), notifier.clone(), keys());
    Harness { store, storage, notifier }
}

pub const LOGIN_OK_BODY: &str = r#"{"token":"T","user":{"id":"1","email":"a@b.com"}}"#;
