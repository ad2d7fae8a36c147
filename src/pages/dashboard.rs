//! Dashboard page: profile card, backend details card, refresh and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Visitors without a session are sent back to the login
//! route. The details payload is fetched on mount and on demand; a failed
//! fetch keeps whatever was shown before and raises an error toast. A 401
//! here does not end the session.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field_list::FieldList;
use crate::config::AppConfig;
use crate::state::details::DetailsState;
use crate::state::session::SessionContext;
use crate::state::toast::ToastQueue;
use crate::util::auth::{LOGIN_ROUTE, install_unauth_redirect};
use crate::util::format::{field_rows, welcome_text};

pub fn refresh_label(loading: bool) -> &'static str {
    if loading { "Loading..." } else { "Refresh" }
}

pub fn empty_details_hint(api_base_url: &str) -> String {
    format!("No data available. Make sure your backend is running on {api_base_url}.")
}

/// What the details card body shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailsBody {
    Loading,
    Fields,
    Empty,
}

pub fn details_body(state: &DetailsState) -> DetailsBody {
    if state.loading {
        DetailsBody::Loading
    } else if state.has_data() {
        DetailsBody::Fields
    } else {
        DetailsBody::Empty
    }
}

/// Start a details fetch unless one is already running.
fn load_details(ctx: SessionContext, details: RwSignal<DetailsState>, toasts: ToastQueue) {
    if !details.try_update(DetailsState::begin).unwrap_or(false) {
        return;
    }

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::state::toast::{Notifier, Toast};

        let result = ctx.store().fetch_details().await;
        if let Some(err) = details.try_update(|d| d.finish(result)).flatten() {
            if err.is_unauthorized() {
                log::warn!("details fetch rejected, the session token may have expired: {err}");
            } else {
                log::error!("details fetch failed: {err}");
            }
            toasts.notify(Toast::details_failed());
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ctx, toasts);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let toasts = expect_context::<ToastQueue>();
    let config = expect_context::<AppConfig>();
    let session = ctx.state();
    let details = RwSignal::new(DetailsState::default());
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate.clone());

    if session.get_untracked().is_authenticated() {
        load_details(ctx.clone(), details, toasts);
    }

    let refresh_ctx = ctx.clone();
    let on_refresh = move |_| load_details(refresh_ctx.clone(), details, toasts);

    let on_logout = move |_| {
        ctx.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    let loading = move || details.get().loading;
    let empty_hint = empty_details_hint(&config.api_base_url);
    let user_rows = Signal::derive(move || session.get().user().map(field_rows).unwrap_or_default());
    let detail_rows =
        Signal::derive(move || details.get().details.as_ref().map(field_rows).unwrap_or_default());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>{move || welcome_text(session.get().user())}</h1>
                <button class="btn btn--secondary" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <section class="dashboard-grid">
                <div class="card">
                    <h2>"User Information"</h2>
                    <p class="card__subtitle">"Your account details"</p>
                    <FieldList rows=user_rows empty="No profile fields."/>
                </div>
                <div class="card">
                    <div class="card__header">
                        <div>
                            <h2>"API Response"</h2>
                            <p class="card__subtitle">"Data from your backend service"</p>
                        </div>
                        <button class="btn" on:click=on_refresh disabled=loading>
                            {move || refresh_label(loading())}
                        </button>
                    </div>
                    {move || match details_body(&details.get()) {
                        DetailsBody::Loading => {
                            view! { <p class="card__loading">"Loading details..."</p> }.into_any()
                        }
                        DetailsBody::Fields => view! { <FieldList rows=detail_rows empty=""/> }.into_any(),
                        DetailsBody::Empty => {
                            view! { <p class="field-list__empty">{empty_hint.clone()}</p> }.into_any()
                        }
                    }}
                </div>
            </section>
        </div>
    }
}
