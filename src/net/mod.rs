//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single dispatch point: it attaches credentials, applies
//! per-call timeouts, and tears the session down on 401. The `api_*`
//! modules are thin per-endpoint wrappers over it, `types` defines the
//! wire schema, and `error` the failure taxonomy.

pub mod api_ai;
pub mod api_articles;
pub mod api_auth;
pub mod api_categories;
pub mod api_profile;
pub mod error;
pub mod http;
pub mod types;
