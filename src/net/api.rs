//! REST API client for the movie backend.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`. Native build:
//! stubs returning [`ApiError::Unavailable`] since these endpoints are
//! only reachable from the browser.
//!
//! Every outgoing request reads the access token from persistent storage
//! — not from the in-memory session — and attaches it as
//! `Authorization: Bearer <token>` when present. No retries and no
//! refresh-on-401 anywhere; failures are surfaced verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::net::types::{
    LikeToggle, MovieDetail, MovieListItem, MovieSummary, Review, TokenPair, User,
    WatchListEntry, WatchStatus,
};
use crate::session::lifecycle::AuthApi;
use crate::session::tokens::{ACCESS_TOKEN_KEY, TokenStore};

#[cfg(feature = "csr")]
use crate::session::tokens::BrowserTokens;

/// Fixed API origin; all request paths are relative to it.
pub const API_BASE: &str = "http://127.0.0.1:8000/api/v1/";

/// Authorization header value for the access token currently held in
/// persistent storage. Empty or absent tokens yield `None` so guests send
/// no header at all.
pub fn bearer_value(tokens: &dyn TokenStore) -> Option<String> {
    let token = tokens.get(ACCESS_TOKEN_KEY)?;
    if token.is_empty() {
        return None;
    }
    Some(format!("Bearer {token}"))
}

/// Stateless client for the movie REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base: API_BASE.to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut req = gloo_net::http::Request::get(&self.url(path));
            if let Some(value) = bearer_value(&BrowserTokens) {
                req = req.header("Authorization", &value);
            }
            let resp = req
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut req = gloo_net::http::Request::post(&self.url(path));
            if let Some(value) = bearer_value(&BrowserTokens) {
                req = req.header("Authorization", &value);
            }
            let resp = req
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// POST whose response body the caller does not need; only the status
    /// is checked.
    async fn post_json_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut req = gloo_net::http::Request::post(&self.url(path));
            if let Some(value) = bearer_value(&BrowserTokens) {
                req = req.header("Authorization", &value);
            }
            let resp = req
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// POST with an empty body.
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut req = gloo_net::http::Request::post(&self.url(path));
            if let Some(value) = bearer_value(&BrowserTokens) {
                req = req.header("Authorization", &value);
            }
            let resp = req
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// Create an account via `POST auth/register/`.
    ///
    /// # Errors
    ///
    /// Surfaces the HTTP failure verbatim; the caller owns presentation.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, ApiError> {
        self.post_json(
            "auth/register/",
            &CredentialsRequest {
                username: username.to_owned(),
                password: password.to_owned(),
            },
        )
        .await
    }

    /// `GET movies/` — the full movie list.
    pub async fn movies(&self) -> Result<Vec<MovieListItem>, ApiError> {
        self.get_json("movies/").await
    }

    /// `GET movies/{id}/` — one movie with genres, casts, and the
    /// requesting user's score/watchlist context.
    pub async fn movie(&self, id: u32) -> Result<MovieDetail, ApiError> {
        self.get_json(&format!("movies/{id}/")).await
    }

    /// `GET movies/{id}/similar/` — simple same-country recommendations.
    pub async fn similar_movies(&self, id: u32) -> Result<Vec<MovieSummary>, ApiError> {
        self.get_json(&format!("movies/{id}/similar/")).await
    }

    /// `GET movies/{id}/reviews/` — newest first.
    pub async fn reviews(&self, movie_id: u32) -> Result<Vec<Review>, ApiError> {
        self.get_json(&format!("movies/{movie_id}/reviews/")).await
    }

    /// `POST movies/{id}/reviews/` — anonymous nickname + content.
    pub async fn create_review(
        &self,
        movie_id: u32,
        author: &str,
        content: &str,
    ) -> Result<Review, ApiError> {
        self.post_json(
            &format!("movies/{movie_id}/reviews/"),
            &ReviewRequest {
                author: author.to_owned(),
                content: content.to_owned(),
            },
        )
        .await
    }

    /// `POST reviews/{id}/like/` — toggles the like and returns the new
    /// count.
    pub async fn toggle_review_like(&self, review_id: u32) -> Result<LikeToggle, ApiError> {
        self.post_empty(&format!("reviews/{review_id}/like/")).await
    }

    /// `POST movies/{id}/ratings/` — create or update the user's score.
    /// The response body is discarded; callers refetch the detail, which
    /// already carries `user_score`.
    pub async fn rate_movie(&self, movie_id: u32, score: f64) -> Result<(), ApiError> {
        self.post_json_ack(&format!("movies/{movie_id}/ratings/"), &RatingRequest { score })
            .await
    }

    /// `POST movies/{id}/watchlist-toggle/` — set the watch status.
    pub async fn toggle_watchlist(
        &self,
        movie_id: u32,
        status: WatchStatus,
    ) -> Result<(), ApiError> {
        self.post_json_ack(
            &format!("movies/{movie_id}/watchlist-toggle/"),
            &WatchlistRequest { status },
        )
        .await
    }

    /// `GET watchlist/me/` — the authenticated user's watchlist.
    pub async fn my_watchlist(&self) -> Result<Vec<WatchListEntry>, ApiError> {
        self.get_json("watchlist/me/").await
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError> {
        self.post_json(
            "auth/login/",
            &CredentialsRequest {
                username: username.to_owned(),
                password: password.to_owned(),
            },
        )
        .await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json("auth/me/").await
    }
}

#[derive(Serialize)]
struct CredentialsRequest {
    username: String,
    password: String,
}

#[derive(Serialize)]
struct ReviewRequest {
    author: String,
    content: String,
}

#[derive(Serialize)]
struct RatingRequest {
    score: f64,
}

#[derive(Serialize)]
struct WatchlistRequest {
    status: WatchStatus,
}
