//! Login page with a username/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::routes::{Page, path_for};
use crate::session::lifecycle;
use crate::session::state::SessionState;
use crate::session::tokens::BrowserTokens;

/// Login page — exchanges credentials for a session. A failed login is
/// rendered inline; the session itself is left untouched by failures.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() || pending.get_untracked() {
            return;
        }

        pending.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            // Snapshot, mutate through the lifecycle, publish once.
            let mut state = session.get_untracked();
            match lifecycle::login(&mut state, &BrowserTokens, &ApiClient::new(), &user, &pass)
                .await
            {
                Ok(()) => {
                    session.set(state);
                    navigate(&path_for(&Page::Home), NavigateOptions::default());
                }
                Err(err) => {
                    log::info!("login rejected: {err}");
                    pending.set(false);
                    error.set(Some(format!("Login failed: {err}")));
                }
            }
        });
    });

    view! {
        <div class="login-page">
            <h1>"Login"</h1>
            <form
                class="auth-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="auth-form__label">
                    "Username"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
            <p class="auth-form__hint">
                "No account yet? " <a href=path_for(&Page::Register)>"Register"</a>
            </p>
        </div>
    }
}
