//! Route-level pages.
//!
//! Views are intentionally thin: they carry the login/register flows and
//! the auth guard, and delegate everything else to `net` and `state`.

pub mod articles;
pub mod home;
pub mod login;
pub mod register;
