//! Client-side session state machine and its persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` owns the authenticated-user value and the persisted token.
//! Pages reach it through [`SessionContext`], which mirrors the store's state
//! into a signal so views re-render when the session changes. There is no
//! event stream: the current [`SessionState`] is the only observable.
//!
//! DESIGN
//! ======
//! - States: `Initializing` → (`restore`) → `Unauthenticated` | `Authenticated`.
//! - The token and user record live in two storage slots that are written
//!   together and cleared together. Restore treats their joint presence as
//!   the only signal of an existing session; partial presence is absence.
//! - `login` carries its own in-flight guard so overlapping submits cannot
//!   race, independent of whether a view disabled its button.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use super::toast::{Notifier, Toast};
use crate::error::SessionError;
use crate::net::api::ApiClient;
use crate::net::types::{LoginResponse, UserDetails, UserProfile};
use crate::util::storage::KeyValueStore;

/// An authenticated token + user pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self { token: resp.token, user: resp.user }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Startup restore has not run yet.
    #[default]
    Initializing,
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_initializing(&self) -> bool {
        matches!(self, Self::Initializing)
    }
}

/// Storage keys for the two persisted slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub token: String,
    pub user: String,
}

impl StorageKeys {
    pub fn for_namespace(namespace: &str) -> Self {
        Self { token: format!("{namespace}.auth_token"), user: format!("{namespace}.user") }
    }
}

/// Owner of the session value and its persisted record.
pub struct SessionStore {
    api: ApiClient,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    keys: StorageKeys,
    state: Mutex<SessionState>,
    login_in_flight: AtomicBool,
}

/// Clears the in-flight flag even if the login future is dropped mid-request.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SessionStore {
    pub fn new(
        api: ApiClient,
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        keys: StorageKeys,
    ) -> Self {
        Self {
            api,
            storage,
            notifier,
            keys,
            state: Mutex::new(SessionState::Initializing),
            login_in_flight: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_state(&self, next: SessionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Rebuild the session from storage without contacting the backend.
    ///
    /// Always ends in `Authenticated` or `Unauthenticated`. Missing, empty,
    /// or unparsable slots clear both slots.
    pub fn restore(&self) -> SessionState {
        let next = match self.read_record() {
            Ok(Some(session)) => {
                log::info!("restored session from storage");
                SessionState::Authenticated(session)
            }
            Ok(None) => {
                self.clear_record();
                SessionState::Unauthenticated
            }
            Err(e) => {
                log::warn!("discarding stored session: {e}");
                self.clear_record();
                SessionState::Unauthenticated
            }
        };
        self.set_state(next.clone());
        next
    }

    fn read_record(&self) -> Result<Option<Session>, SessionError> {
        let token = self.storage.get(&self.keys.token).filter(|t| !t.is_empty());
        let user = self.storage.get(&self.keys.user).filter(|u| !u.is_empty());
        let (Some(token), Some(raw_user)) = (token, user) else {
            return Ok(None);
        };
        let user: UserProfile =
            serde_json::from_str(&raw_user).map_err(|e| SessionError::StorageCorrupt(e.to_string()))?;
        Ok(Some(Session { token, user }))
    }

    /// Write both slots. A failed write clears both so a lone slot never survives.
    fn write_record(&self, session: &Session) {
        let user_json = match serde_json::to_string(&session.user) {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to serialize user record: {e}");
                self.clear_record();
                return;
            }
        };
        let written = self
            .storage
            .set(&self.keys.user, &user_json)
            .and_then(|()| self.storage.set(&self.keys.token, &session.token));
        if let Err(e) = written {
            log::warn!("session not persisted, it will not survive a reload: {e}");
            self.clear_record();
        }
    }

    fn clear_record(&self) {
        self.storage.remove(&self.keys.token);
        self.storage.remove(&self.keys.user);
    }

    /// Exchange credentials for a session.
    ///
    /// On success the record is persisted, state becomes `Authenticated`,
    /// and a success notification is raised; navigation is the caller's job.
    /// On failure state and storage are untouched and a failure notification
    /// carries the error message.
    ///
    /// # Errors
    ///
    /// Returns the [`SessionError`] that caused the failure, or
    /// [`SessionError::LoginInProgress`] (without notifying) when another
    /// login is still outstanding.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        if self.login_in_flight.swap(true, Ordering::AcqRel) {
            log::warn!("login ignored: another request is in flight");
            return Err(SessionError::LoginInProgress);
        }
        let _guard = InFlightGuard(&self.login_in_flight);

        log::info!("logging in as {email}");
        match self.api.login(email, password).await {
            Ok(resp) => {
                let session = Session::from(resp);
                self.write_record(&session);
                self.set_state(SessionState::Authenticated(session.clone()));
                self.notifier.notify(Toast::login_succeeded());
                log::info!("login succeeded");
                Ok(session)
            }
            Err(e) => {
                log::error!("login failed: {e}");
                self.notifier.notify(Toast::login_failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Clear both slots and drop the session. Idempotent and infallible.
    pub fn logout(&self) {
        self.clear_record();
        self.set_state(SessionState::Unauthenticated);
        self.notifier.notify(Toast::logged_out());
        log::info!("logged out");
    }

    /// Fetch the details payload with the current session's token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] without a session, otherwise
    /// whatever the details request failed with.
    pub async fn fetch_details(&self) -> Result<UserDetails, SessionError> {
        let token = match self.state() {
            SessionState::Authenticated(session) => session.token,
            _ => return Err(SessionError::NotAuthenticated),
        };
        self.api.fetch_details(&token).await
    }
}

/// Reactive handle to the [`SessionStore`], provided once at the app root.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<SessionStore>,
    state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new(store: Arc<SessionStore>) -> Self {
        let state = RwSignal::new(store.state());
        Self { store, state }
    }

    /// Current session state; tracked when read inside a reactive scope.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    fn publish(&self) {
        self.state.try_set(self.store.state());
    }

    pub fn restore(&self) {
        self.store.restore();
        self.publish();
    }

    /// See [`SessionStore::login`].
    ///
    /// # Errors
    ///
    /// Propagates the store's error after publishing the resulting state.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        let result = self.store.login(email, password).await;
        self.publish();
        result
    }

    pub fn logout(&self) {
        self.store.logout();
        self.publish();
    }
}
