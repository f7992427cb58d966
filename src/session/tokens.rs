//! Persistent token storage.
//!
//! The credential pair lives under two fixed `localStorage` keys, written
//! only by the session lifecycle. The HTTP client reads the access key
//! back from storage (not from the in-memory session) when attaching the
//! bearer header. The `TokenStore` trait is the seam that lets the
//! lifecycle run against an in-memory store in native tests.

/// localStorage key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "access";
/// localStorage key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh";

/// Plain-string key-value storage for the credential pair.
///
/// Absent keys read as `None`; writes and removals never fail from the
/// caller's point of view (a missing browser storage degrades to a no-op).
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed store. Every method is a no-op / `None` outside
/// the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window()?;
            if let Ok(Some(storage)) = window.local_storage() {
                return storage.get_item(key).ok().flatten();
            }
            None
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
