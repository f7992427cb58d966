//! Router fallback for unmatched paths.

use leptos::prelude::*;

use crate::routes::{Page, path_for};

/// Not-found page — the navigation-miss condition is reported here, never
/// treated as fatal.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"The address does not match any page."</p>
            <a class="btn" href=path_for(&Page::Home)>
                "Back to home"
            </a>
        </div>
    }
}
