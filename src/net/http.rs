//! Authenticated HTTP dispatch for all REST calls.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`, raced against a
//! per-call timeout. Server-side (SSR): stubs returning a network error
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, ApiError>`; see `net::error` for the
//! taxonomy. The one stateful branch: a 401 clears the session and bumps
//! its expiry counter before the error propagates. No retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use leptos::prelude::RwSignal;

use crate::net::error::ApiError;
use crate::state::session::SessionState;

/// Default per-call timeout. AI endpoints override it; see `net::api_ai`.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Timeout for multipart uploads, which carry file bodies and need more
/// headroom than the default.
pub const UPLOAD_TIMEOUT_MS: u32 = 30_000;

/// HTTP method for a request descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One outbound request: path, method, optional JSON payload, timeout.
/// Ephemeral; built by an `api_*` wrapper and consumed by [`send`].
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
    /// Correlation id echoed in request/response log lines.
    pub request_id: uuid::Uuid,
    pub path: String,
    pub method: Method,
    pub payload: Option<serde_json::Value>,
    pub timeout_ms: u32,
}

impl RequestDescriptor {
    fn new(method: Method, path: impl Into<String>, payload: Option<serde_json::Value>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4(),
            path: path.into(),
            method,
            payload,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, None)
    }

    pub fn post(path: impl Into<String>, payload: serde_json::Value) -> Self {
        Self::new(Method::Post, path, Some(payload))
    }

    /// POST with an empty body (e.g. the logout endpoint).
    pub fn post_empty(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path, None)
    }

    pub fn put(path: impl Into<String>, payload: serde_json::Value) -> Self {
        Self::new(Method::Put, path, Some(payload))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path, None)
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// Bearer credential header value for a session token, or `None` when the
/// token is empty and the request must go out unauthenticated.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_header(token: &str) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {token}"))
    }
}

/// Whether a response status means the session is no longer valid.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn is_auth_expired(status: u16) -> bool {
    status == 401
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn timeout_message(timeout_ms: u32) -> String {
    format!("request timed out after {timeout_ms} ms")
}

/// Tear the session down for a 401 response: clear credentials in memory
/// and storage, and raise the expiry counter the app shell watches.
#[cfg(feature = "hydrate")]
fn expire_session(session: RwSignal<SessionState>) {
    use leptos::prelude::Update;

    session.update(SessionState::note_auth_expired);
    crate::util::storage::clear_token();
}

/// Dispatch a request and deserialize its body, stripping the transport
/// envelope. Attaches the session's bearer token when one is set.
///
/// # Errors
///
/// `ApiError::Network` on transport failure or timeout; `ApiError::Http`
/// for any non-2xx status. A 401 additionally clears the session before
/// the error is returned.
pub async fn send<T: serde::de::DeserializeOwned>(
    session: RwSignal<SessionState>,
    descriptor: RequestDescriptor,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::GetUntracked;

        let token = session.get_untracked().token;
        leptos::logging::log!(
            "[{}] {} {}",
            descriptor.request_id,
            descriptor.method.as_str(),
            descriptor.path
        );

        let response = dispatch(&descriptor, bearer_header(&token)).await;
        let response = match response {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("[{}] {e}", descriptor.request_id);
                return Err(e);
            }
        };

        let status = response.status();
        if response.ok() {
            return response.json::<T>().await.map_err(|e| {
                leptos::logging::warn!("[{}] bad response body: {e}", descriptor.request_id);
                ApiError::Network(e.to_string())
            });
        }

        let body = response.text().await.unwrap_or_default();
        if is_auth_expired(status) {
            expire_session(session);
        }
        let err = ApiError::Http { status, body };
        leptos::logging::warn!("[{}] {err}", descriptor.request_id);
        Err(err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, descriptor);
        Err(ApiError::Network("not available on the server".to_owned()))
    }
}

/// Like [`send`], but discards the response body. For endpoints that
/// answer 204 or whose body carries nothing the client needs.
///
/// # Errors
///
/// Same taxonomy and 401 handling as [`send`].
pub async fn send_unit(
    session: RwSignal<SessionState>,
    descriptor: RequestDescriptor,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::GetUntracked;

        let token = session.get_untracked().token;
        leptos::logging::log!(
            "[{}] {} {}",
            descriptor.request_id,
            descriptor.method.as_str(),
            descriptor.path
        );

        let response = match dispatch(&descriptor, bearer_header(&token)).await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("[{}] {e}", descriptor.request_id);
                return Err(e);
            }
        };
        let status = response.status();
        if response.ok() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        if is_auth_expired(status) {
            expire_session(session);
        }
        let err = ApiError::Http { status, body };
        leptos::logging::warn!("[{}] {err}", descriptor.request_id);
        Err(err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, descriptor);
        Err(ApiError::Network("not available on the server".to_owned()))
    }
}

/// Build, send, and time-limit one request.
#[cfg(feature = "hydrate")]
async fn dispatch(
    descriptor: &RequestDescriptor,
    authorization: Option<String>,
) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;

    let builder = match descriptor.method {
        Method::Get => Request::get(&descriptor.path),
        Method::Post => Request::post(&descriptor.path),
        Method::Put => Request::put(&descriptor.path),
        Method::Delete => Request::delete(&descriptor.path),
    };
    let builder = match authorization {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    };

    let exchange = async {
        let response = match &descriptor.payload {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        response.map_err(|e| ApiError::Network(e.to_string()))
    };
    let timeout = gloo_timers::future::TimeoutFuture::new(descriptor.timeout_ms);

    match select(Box::pin(exchange), Box::pin(timeout)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Network(timeout_message(descriptor.timeout_ms))),
    }
}

/// Send a multipart form (avatar or image upload) with the same bearer,
/// timeout, logging, and 401 handling as [`send`]. Browser only.
#[cfg(feature = "hydrate")]
pub async fn send_multipart<T: serde::de::DeserializeOwned>(
    session: RwSignal<SessionState>,
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    use futures::future::{Either, select};
    use leptos::prelude::GetUntracked;

    let request_id = uuid::Uuid::new_v4();
    let token = session.get_untracked().token;
    leptos::logging::log!("[{request_id}] POST {path} (multipart)");

    let builder = gloo_net::http::Request::post(path);
    let builder = match bearer_header(&token) {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    };
    // The browser sets the multipart content type and boundary itself.
    let exchange = async {
        builder
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    };
    let timeout = gloo_timers::future::TimeoutFuture::new(UPLOAD_TIMEOUT_MS);
    let response = match select(Box::pin(exchange), Box::pin(timeout)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Network(timeout_message(UPLOAD_TIMEOUT_MS))),
    };
    let response = match response {
        Ok(resp) => resp,
        Err(e) => {
            leptos::logging::warn!("[{request_id}] {e}");
            return Err(e);
        }
    };

    let status = response.status();
    if response.ok() {
        return response.json::<T>().await.map_err(|e| {
            leptos::logging::warn!("[{request_id}] bad response body: {e}");
            ApiError::Network(e.to_string())
        });
    }
    let body = response.text().await.unwrap_or_default();
    if is_auth_expired(status) {
        expire_session(session);
    }
    let err = ApiError::Http { status, body };
    leptos::logging::warn!("[{request_id}] {err}");
    Err(err)
}
