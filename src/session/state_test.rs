use super::*;

fn user() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_is_empty_and_unloaded() {
    let state = SessionState::default();
    assert!(state.access.is_none());
    assert!(state.refresh.is_none());
    assert!(state.user.is_none());
    assert!(!state.loaded);
}

#[test]
fn default_session_is_not_authenticated() {
    assert!(!SessionState::default().is_authenticated());
}

// =============================================================
// is_authenticated derives from the access token
// =============================================================

#[test]
fn is_authenticated_tracks_access_token() {
    let mut state = SessionState::default();
    assert!(!state.is_authenticated());
    state.access = Some("A".to_owned());
    assert!(state.is_authenticated());
    state.access = None;
    assert!(!state.is_authenticated());
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_drops_tokens_and_user_together() {
    let mut state = SessionState {
        access: Some("A".to_owned()),
        refresh: Some("R".to_owned()),
        user: Some(user()),
        loaded: true,
    };
    state.clear();
    assert!(state.access.is_none());
    assert!(state.refresh.is_none());
    assert!(state.user.is_none());
    // No token implies no user.
    assert!(state.access.is_some() || state.user.is_none());
}

#[test]
fn clear_preserves_loaded() {
    let mut state = SessionState {
        loaded: true,
        ..SessionState::default()
    };
    state.clear();
    assert!(state.loaded);
}

#[test]
fn clear_is_idempotent() {
    let mut once = SessionState {
        access: Some("A".to_owned()),
        refresh: Some("R".to_owned()),
        user: Some(user()),
        loaded: true,
    };
    once.clear();
    let mut twice = once.clone();
    twice.clear();
    assert_eq!(once, twice);
}
