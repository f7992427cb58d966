use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use futures::executor::block_on;

use super::*;
use crate::session::tokens::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

#[derive(Default)]
struct MemoryTokens {
    values: RefCell<HashMap<String, String>>,
}

impl TokenStore for MemoryTokens {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

struct MockApi {
    login_result: Result<TokenPair, ApiError>,
    me_result: Result<User, ApiError>,
    login_calls: Cell<usize>,
    me_calls: Cell<usize>,
}

impl MockApi {
    fn new(login_result: Result<TokenPair, ApiError>, me_result: Result<User, ApiError>) -> Self {
        Self {
            login_result,
            me_result,
            login_calls: Cell::new(0),
            me_calls: Cell::new(0),
        }
    }
}

impl AuthApi for MockApi {
    async fn login(&self, _username: &str, _password: &str) -> Result<TokenPair, ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login_result.clone()
    }
    async fn current_user(&self) -> Result<User, ApiError> {
        self.me_calls.set(self.me_calls.get() + 1);
        self.me_result.clone()
    }
}

fn alice() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
    }
}

fn pair() -> TokenPair {
    TokenPair {
        access: "A".to_owned(),
        refresh: "R".to_owned(),
    }
}

fn assert_token_user_invariant(state: &SessionState) {
    assert!(state.access.is_some() || state.user.is_none());
}

// =============================================================
// restore_from_storage
// =============================================================

#[test]
fn restore_reads_both_keys() {
    let tokens = MemoryTokens::default();
    tokens.set(ACCESS_TOKEN_KEY, "A");
    tokens.set(REFRESH_TOKEN_KEY, "R");

    let mut state = SessionState::default();
    restore_from_storage(&mut state, &tokens);
    assert_eq!(state.access.as_deref(), Some("A"));
    assert_eq!(state.refresh.as_deref(), Some("R"));
}

#[test]
fn restore_with_empty_storage_yields_none() {
    let tokens = MemoryTokens::default();
    let mut state = SessionState::default();
    restore_from_storage(&mut state, &tokens);
    assert!(state.access.is_none());
    assert!(state.refresh.is_none());
    assert_token_user_invariant(&state);
}

// =============================================================
// fetch_current_user
// =============================================================

#[test]
fn fetch_without_token_skips_network_and_clears_user() {
    let api = MockApi::new(Ok(pair()), Ok(alice()));
    let mut state = SessionState {
        user: Some(alice()),
        ..SessionState::default()
    };

    block_on(fetch_current_user(&mut state, &api)).expect("no-token fetch is ok");
    assert!(state.user.is_none());
    assert_eq!(api.me_calls.get(), 0);
}

#[test]
fn fetch_success_replaces_user() {
    let api = MockApi::new(Ok(pair()), Ok(alice()));
    let mut state = SessionState {
        access: Some("A".to_owned()),
        ..SessionState::default()
    };

    block_on(fetch_current_user(&mut state, &api)).expect("fetch ok");
    assert_eq!(state.user, Some(alice()));
    assert_token_user_invariant(&state);
}

#[test]
fn fetch_failure_leaves_state_to_the_caller() {
    let api = MockApi::new(Ok(pair()), Err(ApiError::Status(401)));
    let mut state = SessionState {
        access: Some("A".to_owned()),
        ..SessionState::default()
    };
    let before = state.clone();

    let err = block_on(fetch_current_user(&mut state, &api)).expect_err("failure propagates");
    assert_eq!(err, ApiError::Status(401));
    assert_eq!(state, before);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_tokens_makes_no_network_call() {
    let tokens = MemoryTokens::default();
    let api = MockApi::new(Ok(pair()), Ok(alice()));
    let mut state = SessionState::default();

    block_on(initialize(&mut state, &tokens, &api));
    assert!(state.loaded);
    assert!(state.access.is_none());
    assert!(state.user.is_none());
    assert_eq!(api.me_calls.get(), 0);
    assert_token_user_invariant(&state);
}

#[test]
fn initialize_with_stored_token_fetches_user() {
    let tokens = MemoryTokens::default();
    tokens.set(ACCESS_TOKEN_KEY, "A");
    tokens.set(REFRESH_TOKEN_KEY, "R");
    let api = MockApi::new(Ok(pair()), Ok(alice()));
    let mut state = SessionState::default();

    block_on(initialize(&mut state, &tokens, &api));
    assert!(state.loaded);
    assert_eq!(state.access.as_deref(), Some("A"));
    assert_eq!(state.user, Some(alice()));
    assert!(state.is_authenticated());
}

#[test]
fn initialize_with_failing_fetch_tears_the_session_down() {
    let tokens = MemoryTokens::default();
    tokens.set(ACCESS_TOKEN_KEY, "stale");
    tokens.set(REFRESH_TOKEN_KEY, "stale");
    let api = MockApi::new(Ok(pair()), Err(ApiError::Status(401)));
    let mut state = SessionState::default();

    // The failure is resolved internally; initialize never errors.
    block_on(initialize(&mut state, &tokens, &api));
    assert!(state.loaded);
    assert!(state.access.is_none());
    assert!(state.refresh.is_none());
    assert!(state.user.is_none());
    assert!(tokens.get(ACCESS_TOKEN_KEY).is_none());
    assert!(tokens.get(REFRESH_TOKEN_KEY).is_none());
    assert_token_user_invariant(&state);
}

#[test]
fn initialize_network_failure_also_logs_out() {
    // A transient network error is indistinguishable from an expired
    // token and clears the session either way.
    let tokens = MemoryTokens::default();
    tokens.set(ACCESS_TOKEN_KEY, "A");
    let api = MockApi::new(Ok(pair()), Err(ApiError::Network("offline".to_owned())));
    let mut state = SessionState::default();

    block_on(initialize(&mut state, &tokens, &api));
    assert!(state.loaded);
    assert!(!state.is_authenticated());
    assert!(tokens.get(ACCESS_TOKEN_KEY).is_none());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_persists_tokens_and_fetches_user() {
    let tokens = MemoryTokens::default();
    let api = MockApi::new(Ok(pair()), Ok(alice()));
    let mut state = SessionState {
        loaded: true,
        ..SessionState::default()
    };

    block_on(login(&mut state, &tokens, &api, "alice", "pw")).expect("login ok");
    assert_eq!(tokens.get(ACCESS_TOKEN_KEY).as_deref(), Some("A"));
    assert_eq!(tokens.get(REFRESH_TOKEN_KEY).as_deref(), Some("R"));
    assert_eq!(state.access.as_deref(), Some("A"));
    assert_eq!(state.refresh.as_deref(), Some("R"));
    assert_eq!(state.user, Some(alice()));
    assert_eq!(api.me_calls.get(), 1);
    assert_token_user_invariant(&state);
}

#[test]
fn login_makes_the_next_request_carry_the_new_bearer() {
    let tokens = MemoryTokens::default();
    let api = MockApi::new(Ok(pair()), Ok(alice()));
    let mut state = SessionState::default();

    block_on(login(&mut state, &tokens, &api, "alice", "pw")).expect("login ok");
    // The client reads the header value from the same persistent storage.
    assert_eq!(
        crate::net::api::bearer_value(&tokens),
        Some("Bearer A".to_owned())
    );
}

#[test]
fn login_failure_leaves_state_and_storage_untouched() {
    let tokens = MemoryTokens::default();
    let api = MockApi::new(Err(ApiError::Status(400)), Ok(alice()));
    let mut state = SessionState {
        loaded: true,
        ..SessionState::default()
    };
    let before = state.clone();

    let err = block_on(login(&mut state, &tokens, &api, "alice", "wrong"))
        .expect_err("login failure propagates");
    assert_eq!(err, ApiError::Status(400));
    assert_eq!(state, before);
    assert!(tokens.get(ACCESS_TOKEN_KEY).is_none());
    assert!(tokens.get(REFRESH_TOKEN_KEY).is_none());
    assert_eq!(api.me_calls.get(), 0);
}

#[test]
fn login_with_failing_user_fetch_rolls_back_to_guest() {
    let tokens = MemoryTokens::default();
    let api = MockApi::new(Ok(pair()), Err(ApiError::Status(500)));
    let mut state = SessionState::default();

    // The token exchange succeeded, so login itself reports Ok even
    // though the session ends up cleared.
    block_on(login(&mut state, &tokens, &api, "alice", "pw")).expect("login reports ok");
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(tokens.get(ACCESS_TOKEN_KEY).is_none());
    assert_token_user_invariant(&state);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_memory_and_storage() {
    let tokens = MemoryTokens::default();
    tokens.set(ACCESS_TOKEN_KEY, "A");
    tokens.set(REFRESH_TOKEN_KEY, "R");
    let mut state = SessionState {
        access: Some("A".to_owned()),
        refresh: Some("R".to_owned()),
        user: Some(alice()),
        loaded: true,
    };

    logout(&mut state, &tokens);
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.loaded);
    assert!(tokens.get(ACCESS_TOKEN_KEY).is_none());
    assert!(tokens.get(REFRESH_TOKEN_KEY).is_none());
    assert_token_user_invariant(&state);
}

#[test]
fn logout_is_idempotent() {
    let tokens = MemoryTokens::default();
    tokens.set(ACCESS_TOKEN_KEY, "A");
    tokens.set(REFRESH_TOKEN_KEY, "R");
    let mut state = SessionState {
        access: Some("A".to_owned()),
        refresh: Some("R".to_owned()),
        user: Some(alice()),
        loaded: true,
    };

    logout(&mut state, &tokens);
    let after_once = state.clone();
    logout(&mut state, &tokens);
    assert_eq!(state, after_once);
    assert!(tokens.values.borrow().is_empty());
}
