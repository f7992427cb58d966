//! Wire types matching the backend's JSON shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by `GET auth/me/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
}

/// Credential pair returned by `POST auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Card data for the movie list page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieListItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub poster_url: String,
    pub release_year: Option<i32>,
    pub avg_score: Option<f64>,
}

/// Card data for similar-movie recommendations and watchlist rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub poster_url: String,
    pub release_year: Option<i32>,
    #[serde(default)]
    pub country: String,
    pub runtime: Option<i32>,
    pub avg_score: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub profile: String,
}

/// One cast row of a movie (actor, director, or staff).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u32,
    pub person: Person,
    pub role: String,
    #[serde(default)]
    pub character_name: String,
}

/// Full movie record for the detail page. `user_score` and
/// `is_in_watchlist` reflect the requesting user and are absent/false
/// for guests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_url: String,
    pub release_year: Option<i32>,
    #[serde(default)]
    pub country: String,
    pub runtime: Option<i32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub casts: Vec<CastMember>,
    pub avg_score: Option<f64>,
    #[serde(default)]
    pub user_score: Option<f64>,
    #[serde(default)]
    pub is_in_watchlist: bool,
}

/// An anonymous one-line review with its like count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub movie: u32,
    #[serde(default)]
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub like_count: u32,
    pub created_at: String,
}

/// Result of toggling a review like.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeToggle {
    pub liked: bool,
    pub like_count: u32,
}

/// Watchlist status values used by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WatchStatus {
    #[default]
    Want,
    Done,
    Drop,
}

/// One row of `GET watchlist/me/`, with the movie card embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WatchListEntry {
    pub id: u32,
    pub movie: MovieSummary,
    pub status: WatchStatus,
    pub created_at: String,
}
