//! Root application component: session context, boot sequence, routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::net::api::ApiClient;
use crate::pages::{
    home::HomePage, login::LoginPage, movie_detail::MovieDetailPage, movies::MoviesPage,
    my_page::MyPage, not_found::NotFoundPage, register::RegisterPage,
};
use crate::session::lifecycle;
use crate::session::state::SessionState;
use crate::session::tokens::BrowserTokens;

/// Root application component.
///
/// Provides the session signal as context and restores the persisted
/// session before any page content renders: the route outlet stays behind
/// a splash until `loaded` flips, so pages never observe a half-restored
/// session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Boot: restore tokens, fetch the current user if one is held, then
    // publish the loaded state in a single write.
    leptos::task::spawn_local(async move {
        let mut state = SessionState::default();
        lifecycle::initialize(&mut state, &BrowserTokens, &ApiClient::new()).await;
        session.set(state);
    });

    view! {
        <Title text="ReelView"/>

        <Router>
            <NavBar/>
            <main class="content">
                <Show
                    when=move || session.read().loaded
                    fallback=|| view! { <p class="boot-splash">"Loading..."</p> }
                >
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("movies") view=MoviesPage/>
                        <Route
                            path=(StaticSegment("movies"), ParamSegment("id"))
                            view=MovieDetailPage
                        />
                        <Route path=StaticSegment("mypage") view=MyPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                    </Routes>
                </Show>
            </main>
        </Router>
    }
}
