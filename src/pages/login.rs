//! Login page: email + password form backed by the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Failures are reported by the session store's notifications,
//! so the page only tracks its busy flag. Once a session exists (already
//! logged in, or just logged in) the page redirects to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;
use crate::util::auth::install_auth_redirect;

pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign In" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    install_auth_redirect(ctx.state(), use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        #[cfg(feature = "csr")]
        {
            let ctx = ctx.clone();
            leptos::task::spawn_local(async move {
                // Outcome is surfaced by the store's notifications and the redirect effect.
                let _ = ctx.login(&email_value, &password_value).await;
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&ctx, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome Back"</h1>
                <p class="login-card__subtitle">"Enter your credentials to access your dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="name@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}
