//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{
    articles::ArticlesPage, home::HomePage, login::LoginPage, register::RegisterPage,
};
use crate::routes;
use crate::state::session::SessionState;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the session from the persisted token, provides it via context,
/// kicks off the initial profile fetch, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore(storage::read_token()));
    provide_context(session);

    // A restored token is only half a session; fetch the profile for it.
    // On a 401 the fetch tears the session down and the redirect below runs.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::state::session::fetch_profile(session).await {
            leptos::logging::warn!("startup profile fetch failed: {e}");
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/inkflow.css"/>
        <Title text="Inkflow"/>

        <Router>
            <SessionExpiryRedirect/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("articles") view=ArticlesPage/>
            </Routes>
        </Router>
    }
}

/// Subscribes to the session's 401 event: whenever `auth_expired_seq`
/// rises, navigation is forced to the login route. This keeps the
/// transport layer free of any routing knowledge.
#[component]
fn SessionExpiryRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let last_seen = StoredValue::new(0_u64);

    Effect::new(move || {
        let seq = session.get().auth_expired_seq;
        if seq > last_seen.get_value() {
            last_seen.set_value(seq);
            navigate(routes::LOGIN_PATH, NavigateOptions::default());
        }
    });
}
