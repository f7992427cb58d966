//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::routes::{Page, path_for};

/// Register page — creates an account and sends the user to the login
/// page on success. Registration does not log the user in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() || pending.get_untracked() {
            return;
        }
        if pass != confirm.get_untracked() {
            error.set(Some("Passwords do not match.".to_owned()));
            return;
        }

        pending.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match ApiClient::new().register(&user, &pass).await {
                Ok(created) => {
                    log::info!("registered account: {}", created.username);
                    navigate(&path_for(&Page::Login), NavigateOptions::default());
                }
                Err(err) => {
                    pending.set(false);
                    error.set(Some(format!("Registration failed: {err}")));
                }
            }
        });
    });

    view! {
        <div class="register-page">
            <h1>"Register"</h1>
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
                <label class="auth-form__label">
                    "Confirm password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating account..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}
