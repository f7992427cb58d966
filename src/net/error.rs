//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! The client performs no retries and no refresh-on-401: a failed request
//! is surfaced verbatim to whichever operation issued it, and the caller
//! owns presentation. The one automatic reaction in the whole app — the
//! session teardown when the current-user fetch fails — lives in the
//! session lifecycle, not here.

/// A failed REST call, surfaced verbatim to the caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure before any HTTP status was received.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The response body could not be decoded as the expected type.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// Native stub — HTTP is only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}
