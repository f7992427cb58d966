#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::net::types::User;

/// Authentication state: the credential pair, the cached user identity,
/// and whether the boot restore has finished.
///
/// Invariant: `access == None` implies `user == None`. The lifecycle
/// functions uphold it; `clear` is the only way to drop the tokens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub access: Option<String>,
    pub refresh: Option<String>,
    pub user: Option<User>,
    /// Set exactly once, when the boot initialize sequence completes.
    /// Logout does not reset it.
    pub loaded: bool,
}

impl SessionState {
    /// Whether a session is active. Recomputed on every call so observers
    /// of the signal always see the value derived from the current token.
    pub fn is_authenticated(&self) -> bool {
        self.access.is_some()
    }

    /// Drop tokens and user together, keeping `loaded` as is.
    pub fn clear(&mut self) {
        self.access = None;
        self.refresh = None;
        self.user = None;
    }
}
