//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session is the only durable state this layer owns; domain entities
//! (articles, categories, AI sessions) belong to the backend and pass
//! through as DTOs. The session signal is created in `app::App` and
//! injected via context, never reached ambiently.

pub mod session;
