//! Session lifecycle: restore, login, logout, current-user fetch.
//!
//! DESIGN
//! ======
//! These are free async functions over `&mut SessionState`, a
//! [`TokenStore`], and an [`AuthApi`] implementation, so the whole
//! lifecycle runs in native tests with an in-memory store and a mock API.
//! `fetch_current_user` reports failure instead of tearing the session
//! down itself; `initialize` and `login` are the two call sites that turn
//! that failure into the full logout transition, which keeps the
//! error-classification decision visible.
//!
//! A failed current-user fetch is not classified: an expired token and an
//! unreachable backend both end in the same session teardown (see
//! DESIGN.md).

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use crate::net::error::ApiError;
use crate::net::types::{TokenPair, User};
use crate::session::state::SessionState;
use crate::session::tokens::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TokenStore};

/// The two auth endpoints the lifecycle depends on. Implemented by the
/// real `ApiClient` and by mocks in tests.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError>;
    async fn current_user(&self) -> Result<User, ApiError>;
}

/// Read both token keys from persistent storage into memory.
/// Absent keys yield `None`; never fails.
pub fn restore_from_storage(state: &mut SessionState, tokens: &dyn TokenStore) {
    state.access = tokens.get(ACCESS_TOKEN_KEY);
    state.refresh = tokens.get(REFRESH_TOKEN_KEY);
}

/// Fetch the current user for the held access token.
///
/// With no token this resets `user` and returns `Ok` without any network
/// call. On failure the state is left untouched and the error is returned;
/// the caller decides whether to tear the session down.
///
/// # Errors
///
/// Propagates the `auth/me/` failure verbatim.
pub async fn fetch_current_user<A: AuthApi>(
    state: &mut SessionState,
    api: &A,
) -> Result<(), ApiError> {
    if state.access.is_none() {
        state.user = None;
        return Ok(());
    }
    let user = api.current_user().await?;
    state.user = Some(user);
    Ok(())
}

/// Boot sequence: restore tokens, fetch the user if a token is present,
/// then mark the session loaded.
///
/// A current-user failure is resolved by the full logout transition and is
/// observable only through the log — `initialize` itself never fails, and
/// `loaded` is set unconditionally so the UI can stop waiting either way.
pub async fn initialize<A: AuthApi>(
    state: &mut SessionState,
    tokens: &dyn TokenStore,
    api: &A,
) {
    restore_from_storage(state, tokens);
    if state.access.is_some() {
        if let Err(err) = fetch_current_user(state, api).await {
            log::warn!("current-user fetch failed, clearing session: {err}");
            logout(state, tokens);
        }
    }
    state.loaded = true;
}

/// Exchange credentials for a token pair, persist it, and fetch the user.
///
/// A login failure leaves state and storage untouched; surfacing it is the
/// caller's responsibility. A current-user failure after a successful
/// token exchange is handled like the boot case: logged and resolved by
/// logout, with `login` still returning `Ok`.
///
/// # Errors
///
/// Propagates the `auth/login/` failure verbatim.
pub async fn login<A: AuthApi>(
    state: &mut SessionState,
    tokens: &dyn TokenStore,
    api: &A,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    let pair = api.login(username, password).await?;

    state.access = Some(pair.access.clone());
    state.refresh = Some(pair.refresh.clone());
    tokens.set(ACCESS_TOKEN_KEY, &pair.access);
    tokens.set(REFRESH_TOKEN_KEY, &pair.refresh);

    if let Err(err) = fetch_current_user(state, api).await {
        log::warn!("current-user fetch failed after login, clearing session: {err}");
        logout(state, tokens);
    }
    Ok(())
}

/// Clear the in-memory session and remove both persisted keys.
/// Synchronous and idempotent.
pub fn logout(state: &mut SessionState, tokens: &dyn TokenStore) {
    state.clear();
    tokens.remove(ACCESS_TOKEN_KEY);
    tokens.remove(REFRESH_TOKEN_KEY);
}
