//! Reusable card component for movie list and recommendation grids.

use leptos::prelude::*;

use crate::routes::{Page, path_for};

/// A clickable poster card linking to the movie's detail page.
#[component]
pub fn MovieCard(
    id: u32,
    title: String,
    poster_url: String,
    release_year: Option<i32>,
    avg_score: Option<f64>,
) -> impl IntoView {
    let href = path_for(&Page::MovieDetail { id: id.to_string() });
    let year = release_year.map_or_else(String::new, |y| y.to_string());
    let score = avg_score.map_or_else(|| "–".to_owned(), |s| format!("{s:.1}"));

    let poster = if poster_url.is_empty() {
        view! { <div class="movie-card__poster movie-card__poster--empty"></div> }.into_any()
    } else {
        view! { <img class="movie-card__poster" src=poster_url alt=title.clone()/> }.into_any()
    };

    view! {
        <a class="movie-card" href=href>
            {poster}
            <span class="movie-card__title">{title}</span>
            <span class="movie-card__meta">
                <span class="movie-card__year">{year}</span>
                <span class="movie-card__score">{"★ "}{score}</span>
            </span>
        </a>
    }
}
