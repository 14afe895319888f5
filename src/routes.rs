//! Route table and the navigation auth guard.
//!
//! DESIGN
//! ======
//! The guard is a pure function of route metadata and session state: a
//! protected route with no token redirects to login, everything else
//! proceeds. Pages apply it in a redirect effect; the HTTP layer never
//! calls it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/";
pub const ARTICLES_PATH: &str = "/articles";

/// Static metadata for one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: &'static str,
    pub requires_auth: bool,
}

/// All client routes with their auth requirements.
pub const ROUTES: [RouteMeta; 4] = [
    RouteMeta {
        path: LOGIN_PATH,
        requires_auth: false,
    },
    RouteMeta {
        path: REGISTER_PATH,
        requires_auth: false,
    },
    RouteMeta {
        path: HOME_PATH,
        requires_auth: true,
    },
    RouteMeta {
        path: ARTICLES_PATH,
        requires_auth: true,
    },
];

/// Outcome of the guard for one attempted transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allowed,
    RedirectToLogin,
}

pub fn route_meta(path: &str) -> Option<&'static RouteMeta> {
    ROUTES.iter().find(|meta| meta.path == path)
}

/// Decide whether a transition to `meta` may proceed for this session.
pub fn check_route(meta: &RouteMeta, session: &SessionState) -> GuardOutcome {
    if meta.requires_auth && !session.is_authenticated() {
        GuardOutcome::RedirectToLogin
    } else {
        GuardOutcome::Allowed
    }
}

/// [`check_route`] by path. Unknown paths carry no auth requirement and
/// fall through to the router's own not-found handling.
pub fn check_path(path: &str, session: &SessionState) -> GuardOutcome {
    match route_meta(path) {
        Some(meta) => check_route(meta, session),
        None => GuardOutcome::Allowed,
    }
}
