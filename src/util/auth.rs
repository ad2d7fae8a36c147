//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login and dashboard pages apply mirror-image redirects: the dashboard
//! sends unauthenticated visitors to the login route, the login page sends
//! authenticated users to the dashboard. Neither fires while the session is
//! still `Initializing`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// True once restore has finished and no session exists.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.is_initializing() && !state.is_authenticated()
}

pub fn should_redirect_to_dashboard(state: &SessionState) -> bool {
    state.is_authenticated()
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to the login route whenever the session resolves to unauthenticated.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_ROUTE, replace());
        }
    });
}

/// Redirect to the dashboard whenever a session is present.
pub fn install_auth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_to_dashboard(&session.get()) {
            navigate(DASHBOARD_ROUTE, replace());
        }
    });
}
