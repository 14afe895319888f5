//! Failure taxonomy for API calls.
//!
//! DESIGN
//! ======
//! Three cases cover the whole boundary: the transport failed, the server
//! answered with an error status, or the login credentials were rejected.
//! Nothing is retried; every failure propagates to the caller after at most
//! one side effect (session teardown on 401, applied in `net::http`).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every API wrapper in this crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Connection failure, malformed exchange, or per-call timeout.
    #[error("network error: {0}")]
    Network(String),
    /// Server-returned error status with the raw response body.
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    /// Credentials rejected during login.
    #[error("authentication failed: {0}")]
    Auth(String),
}

impl ApiError {
    /// Whether this error is a 401 response, i.e. the session was expired
    /// or invalid and has already been torn down.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }
}
