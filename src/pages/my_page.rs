//! My page — profile and watchlist for the signed-in user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::WatchStatus;
use crate::routes::{Page, path_for};
use crate::session::state::SessionState;

fn status_label(status: WatchStatus) -> &'static str {
    match status {
        WatchStatus::Want => "Want to watch",
        WatchStatus::Done => "Watched",
        WatchStatus::Drop => "Dropped",
    }
}

/// My page — redirects to `/login` when the loaded session has no user,
/// otherwise shows the username and the watchlist.
#[component]
pub fn MyPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirect guests once the boot restore has finished.
    Effect::new(move || {
        let state = session.get();
        if state.loaded && state.user.is_none() {
            navigate(&path_for(&Page::Login), NavigateOptions::default());
        }
    });

    let watchlist = LocalResource::new(|| async { ApiClient::new().my_watchlist().await });

    view! {
        <div class="my-page">
            <h1>"My Page"</h1>
            <p class="my-page__user">
                {move || {
                    session
                        .read()
                        .user
                        .as_ref()
                        .map_or_else(String::new, |u| format!("Signed in as {}", u.username))
                }}
            </p>

            <h2>"Watchlist"</h2>
            <Suspense fallback=move || view! { <p>"Loading watchlist..."</p> }>
                {move || {
                    watchlist
                        .get()
                        .map(|result| match result {
                            Ok(entries) => {
                                if entries.is_empty() {
                                    view! { <p>"Nothing on your watchlist yet."</p> }.into_any()
                                } else {
                                    view! {
                                        <ul class="my-page__watchlist">
                                            {entries
                                                .into_iter()
                                                .map(|entry| {
                                                    let href = path_for(&Page::MovieDetail {
                                                        id: entry.movie.id.to_string(),
                                                    });
                                                    view! {
                                                        <li class="my-page__watchlist-item">
                                                            <a href=href>{entry.movie.title}</a>
                                                            <span class="my-page__status">
                                                                {status_label(entry.status)}
                                                            </span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! {
                                    <p class="my-page__error">
                                        "Could not load watchlist: " {err.to_string()}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
