//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::http::HttpTransport;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{SessionContext, SessionStore, StorageKeys};
use crate::state::toast::ToastQueue;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Wires the session store to the browser transport and `localStorage`,
/// restores any persisted session before the routes render, and provides
/// the session, toast, and config contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    log::info!("backend at {}", config.api_base_url);

    let toasts = ToastQueue::new(config.toast_duration_ms);
    let api = ApiClient::new(Arc::new(HttpTransport::new(config.api_base_url.clone())));
    let store = SessionStore::new(
        api,
        Arc::new(BrowserStorage),
        Arc::new(toasts),
        StorageKeys::for_namespace(&config.storage_namespace),
    );
    let session = SessionContext::new(Arc::new(store));
    session.restore();

    provide_context(session);
    provide_context(toasts);
    provide_context(config);

    view! {
        <Title text="Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
