//! Transient user notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store and pages report outcomes through the [`Notifier`]
//! trait. In the app it is backed by [`ToastQueue`], a reactive list
//! rendered by `components::toast_host`; tests substitute a recorder.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use uuid::Uuid;

/// Most toasts shown at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), title: title.into(), description: description.into(), variant: ToastVariant::Default }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { variant: ToastVariant::Destructive, ..Self::info(title, description) }
    }

    pub fn login_succeeded() -> Self {
        Self::info("Success", "You've been logged in successfully")
    }

    pub fn login_failed(message: impl Into<String>) -> Self {
        Self::error("Login Failed", message)
    }

    pub fn logged_out() -> Self {
        Self::info("Logged out", "You've been logged out successfully")
    }

    pub fn details_failed() -> Self {
        Self::error("Error", "Failed to fetch user details. Please check if your backend is running.")
    }
}

/// Bounded list of visible toasts, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastList {
    items: Vec<Toast>,
}

impl ToastList {
    pub fn push(&mut self, toast: Toast) {
        self.items.push(toast);
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
    }

    /// Remove the toast with `id`. Returns whether it was present.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sink for user-visible notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Reactive toast list shared through context.
#[derive(Clone, Copy, Debug)]
pub struct ToastQueue {
    list: RwSignal<ToastList>,
    duration_ms: u32,
}

impl ToastQueue {
    pub fn new(duration_ms: u32) -> Self {
        Self { list: RwSignal::new(ToastList::default()), duration_ms }
    }

    pub fn list(&self) -> RwSignal<ToastList> {
        self.list
    }

    pub fn dismiss(&self, id: Uuid) {
        self.list.try_update(|l| l.dismiss(id));
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        let id = toast.id;
        self.list.try_update(|l| l.push(toast));

        #[cfg(feature = "csr")]
        {
            let queue = *self;
            gloo_timers::callback::Timeout::new(self.duration_ms, move || queue.dismiss(id)).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, self.duration_ms);
        }
    }
}
