//! Landing page.

use leptos::prelude::*;

use crate::routes::{Page, path_for};
use crate::session::state::SessionState;

/// Home page — hero banner with entry points into the catalog.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home-page">
            <h1>"ReelView"</h1>
            <p class="home-page__tagline">"Browse movies, rate them, keep a watchlist."</p>
            <div class="home-page__actions">
                <a class="btn btn--primary" href=path_for(&Page::Movies)>
                    "Browse movies"
                </a>
                <Show when=move || !session.read().is_authenticated()>
                    <a class="btn" href=path_for(&Page::Login)>
                        "Login"
                    </a>
                </Show>
            </div>
        </div>
    }
}
