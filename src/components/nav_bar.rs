//! Top navigation bar.
//!
//! Links are built through the route table, the active link is classified
//! through the same table, and the right-hand side switches between
//! login/register links and the username + logout button depending on the
//! session signal.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{Page, path_for, resolve};
use crate::session::lifecycle;
use crate::session::state::SessionState;
use crate::session::tokens::BrowserTokens;

/// Top navigation bar with session-aware auth links.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    // Memo is Copy, so the classifier can move into every link closure.
    let pathname = location.pathname;
    let current = move || resolve(&pathname.get());
    let link_class = move |page: Page| {
        let active = match current() {
            // Detail pages highlight the Movies section.
            Some(Page::MovieDetail { .. }) => page == Page::Movies,
            Some(here) => here == page,
            None => false,
        };
        if active { "nav__link nav__link--active" } else { "nav__link" }
    };

    // Logout stays on the current page; pages that require a user
    // redirect themselves once the session turns guest.
    let on_logout = move |_| {
        session.update(|state| lifecycle::logout(state, &BrowserTokens));
    };

    view! {
        <nav class="nav">
            <a class="nav__brand" href=path_for(&Page::Home)>"ReelView"</a>
            <div class="nav__links">
                <a class=move || link_class(Page::Home) href=path_for(&Page::Home)>"Home"</a>
                <a class=move || link_class(Page::Movies) href=path_for(&Page::Movies)>"Movies"</a>
                <Show when=move || session.read().is_authenticated()>
                    <a class=move || link_class(Page::MyPage) href=path_for(&Page::MyPage)>
                        "My Page"
                    </a>
                </Show>
            </div>
            <div class="nav__auth">
                <Show
                    when=move || session.read().is_authenticated()
                    fallback=move || {
                        view! {
                            <a class=move || link_class(Page::Login) href=path_for(&Page::Login)>
                                "Login"
                            </a>
                            <a
                                class=move || link_class(Page::Register)
                                href=path_for(&Page::Register)
                            >
                                "Register"
                            </a>
                        }
                    }
                >
                    <span class="nav__user">
                        {move || {
                            session.read().user.as_ref().map(|u| u.username.clone())
                        }}
                    </span>
                    <button class="nav__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
