//! Movie detail page: full record, rating, watchlist, reviews, and
//! similar-movie recommendations.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::movie_card::MovieCard;
use crate::net::api::ApiClient;
use crate::net::types::{MovieDetail, Review, WatchStatus};
use crate::session::state::SessionState;

/// Movie detail page — reads the movie id from the route parameter. An id
/// that is not a number renders the same not-found message as an unknown
/// movie.
#[component]
pub fn MovieDetailPage() -> impl IntoView {
    let params = use_params_map();
    let movie_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|id| id.parse::<u32>().ok())
    });

    let detail = LocalResource::new(move || {
        let id = movie_id.get();
        async move {
            match id {
                Some(id) => ApiClient::new().movie(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <div class="detail-page">
            <Suspense fallback=move || view! { <p>"Loading movie..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result {
                            Ok(Some(movie)) => {
                                view! { <MovieBody movie=movie detail=detail/> }.into_any()
                            }
                            Ok(None) => view! { <p>"Movie not found."</p> }.into_any(),
                            Err(err) => {
                                view! {
                                    <p class="detail-page__error">
                                        "Could not load movie: " {err.to_string()}
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

/// Loaded movie record with the interactive sections underneath.
#[component]
fn MovieBody(
    movie: MovieDetail,
    detail: LocalResource<Result<Option<MovieDetail>, crate::net::error::ApiError>>,
) -> impl IntoView {
    let movie_id = movie.id;
    let year = movie.release_year.map_or_else(String::new, |y| y.to_string());
    let runtime = movie
        .runtime
        .map_or_else(String::new, |m| format!("{m} min"));
    let avg = movie
        .avg_score
        .map_or_else(|| "no ratings".to_owned(), |s| format!("★ {s:.1}"));
    let genres = movie
        .genres
        .iter()
        .map(|g| g.name.clone())
        .collect::<Vec<_>>()
        .join(", ");

    let poster = if movie.poster_url.is_empty() {
        view! { <div class="detail-page__poster detail-page__poster--empty"></div> }.into_any()
    } else {
        view! {
            <img class="detail-page__poster" src=movie.poster_url.clone() alt=movie.title.clone()/>
        }
        .into_any()
    };

    view! {
        <article class="detail-page__movie">
            <header class="detail-page__header">
                {poster}
                <div class="detail-page__facts">
                    <h1>{movie.title.clone()}</h1>
                    <p class="detail-page__original-title">{movie.original_title.clone()}</p>
                    <p class="detail-page__meta">
                        {year} " · " {movie.country.clone()} " · " {runtime} " · " {avg}
                    </p>
                    <p class="detail-page__genres">{genres}</p>
                    <UserActions
                        movie_id=movie_id
                        user_score=movie.user_score
                        is_in_watchlist=movie.is_in_watchlist
                        detail=detail
                    />
                </div>
            </header>

            <section class="detail-page__overview">
                <h2>"Overview"</h2>
                <p>{movie.overview.clone()}</p>
            </section>

            <section class="detail-page__cast">
                <h2>"Cast & Crew"</h2>
                <ul>
                    {movie
                        .casts
                        .iter()
                        .map(|c| {
                            let credit = if c.character_name.is_empty() {
                                c.role.clone()
                            } else {
                                format!("{} — {}", c.role, c.character_name)
                            };
                            view! {
                                <li class="detail-page__cast-row">
                                    <span class="detail-page__cast-name">
                                        {c.person.name.clone()}
                                    </span>
                                    <span class="detail-page__cast-credit">{credit}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>

            <ReviewSection movie_id=movie_id/>
            <SimilarSection movie_id=movie_id/>
        </article>
    }
}

/// Rating select and watchlist toggle, shown to authenticated users only.
/// Both refetch the detail, which carries `user_score`/`is_in_watchlist`.
#[component]
fn UserActions(
    movie_id: u32,
    user_score: Option<f64>,
    is_in_watchlist: bool,
    detail: LocalResource<Result<Option<MovieDetail>, crate::net::error::ApiError>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let score = RwSignal::new(user_score.unwrap_or(4.0));

    let on_rate = move |_| {
        let value = score.get_untracked();
        leptos::task::spawn_local(async move {
            match ApiClient::new().rate_movie(movie_id, value).await {
                Ok(()) => detail.refetch(),
                Err(err) => log::error!("rating failed: {err}"),
            }
        });
    };

    let on_toggle_watchlist = move |_| {
        leptos::task::spawn_local(async move {
            match ApiClient::new()
                .toggle_watchlist(movie_id, WatchStatus::Want)
                .await
            {
                Ok(()) => detail.refetch(),
                Err(err) => log::error!("watchlist toggle failed: {err}"),
            }
        });
    };

    let my_score = user_score.map_or_else(String::new, |s| format!("Your score: {s:.1}"));
    let watch_label = if is_in_watchlist {
        "Remove from watchlist"
    } else {
        "Add to watchlist"
    };

    view! {
        <Show when=move || session.read().is_authenticated()>
            <div class="detail-page__actions">
                <span class="detail-page__my-score">{my_score.clone()}</span>
                <select
                    class="detail-page__score-select"
                    on:change=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                            score.set(value);
                        }
                    }
                >
                    {(1..=10)
                        .map(|half| {
                            let value = f64::from(half) / 2.0;
                            view! {
                                <option value=value.to_string() selected=move || {
                                    (score.get() - value).abs() < f64::EPSILON
                                }>{format!("{value:.1}")}</option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn" on:click=on_rate>
                    "Rate"
                </button>
                <button class="btn" on:click=on_toggle_watchlist>
                    {watch_label}
                </button>
            </div>
        </Show>
    }
}

/// Review list, anonymous review form, and like toggles.
#[component]
fn ReviewSection(movie_id: u32) -> impl IntoView {
    let reviews = LocalResource::new(move || async move {
        ApiClient::new().reviews(movie_id).await
    });

    let author = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let nick = author.get_untracked();
        let text = content.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match ApiClient::new().create_review(movie_id, &nick, &text).await {
                Ok(_) => {
                    author.set(String::new());
                    content.set(String::new());
                    reviews.refetch();
                }
                Err(err) => log::error!("review submit failed: {err}"),
            }
        });
    };

    view! {
        <section class="detail-page__reviews">
            <h2>"Reviews"</h2>
            <form class="review-form" on:submit=on_submit>
                <input
                    class="review-form__author"
                    type="text"
                    placeholder="Nickname"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <textarea
                    class="review-form__content"
                    placeholder="Write a review"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">
                    "Post review"
                </button>
            </form>

            <Suspense fallback=move || view! { <p>"Loading reviews..."</p> }>
                {move || {
                    reviews
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! { <p>"No reviews yet."</p> }.into_any()
                                } else {
                                    view! {
                                        <ul class="review-list">
                                            {list
                                                .into_iter()
                                                .map(|review| {
                                                    view! {
                                                        <ReviewRow review=review reviews=reviews/>
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
                                    <p class="detail-page__error">
                                        "Could not load reviews: " {err.to_string()}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

/// One review with its like toggle.
#[component]
fn ReviewRow(
    review: Review,
    reviews: LocalResource<Result<Vec<Review>, crate::net::error::ApiError>>,
) -> impl IntoView {
    let review_id = review.id;
    let author = if review.author.is_empty() {
        "anonymous".to_owned()
    } else {
        review.author.clone()
    };

    let on_like = move |_| {
        leptos::task::spawn_local(async move {
            match ApiClient::new().toggle_review_like(review_id).await {
                Ok(_) => reviews.refetch(),
                Err(err) => log::error!("review like failed: {err}"),
            }
        });
    };

    view! {
        <li class="review-list__item">
            <span class="review-list__author">{author}</span>
            <p class="review-list__content">{review.content.clone()}</p>
            <button class="review-list__like" on:click=on_like>
                "♥ " {review.like_count}
            </button>
        </li>
    }
}

/// Simple same-country recommendations.
#[component]
fn SimilarSection(movie_id: u32) -> impl IntoView {
    let similar = LocalResource::new(move || async move {
        ApiClient::new().similar_movies(movie_id).await
    });

    view! {
        <section class="detail-page__similar">
            <h2>"Similar movies"</h2>
            <Suspense fallback=move || view! { <p>"Loading recommendations..."</p> }>
                {move || {
                    similar
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! { <p>"No recommendations."</p> }.into_any()
                                } else {
                                    view! {
                                        <div class="detail-page__similar-grid">
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
                            // Recommendations are decorative; fail quiet.
                            Err(_) => view! { <p></p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}
