//! Movie list page.

use leptos::prelude::*;

use crate::components::movie_card::MovieCard;
use crate::net::api::ApiClient;

/// Movies page — fetches the catalog on mount and renders a card grid.
#[component]
pub fn MoviesPage() -> impl IntoView {
    let movies = LocalResource::new(|| async { ApiClient::new().movies().await });

    view! {
        <div class="movies-page">
            <h1>"Movies"</h1>
            <Suspense fallback=move || view! { <p>"Loading movies..."</p> }>
                {move || {
                    movies
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! { <p class="movies-page__empty">"No movies yet."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="movies-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|m| {
                                                    view! {
                                                        <MovieCard
                                                            id=m.id
                                                            title=m.title
                                                            poster_url=m.poster_url
                                                            release_year=m.release_year
                                                            avg_score=m.avg_score
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! {
                                    <p class="movies-page__error">
                                        "Could not load movies: " {err.to_string()}
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
