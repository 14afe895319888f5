//! Access-token persistence in `localStorage`.
//!
//! The token survives page reloads under a single well-known key and is
//! removed on logout or session expiry. Requires a browser environment;
//! on the server every operation is a silent no-op.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "inkflow_token";

/// Read the persisted access token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(TOKEN_KEY).ok()?.filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the access token for future page loads.
pub fn persist_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted access token. Safe to call when nothing is stored.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
