//! Home page: profile summary and category overview.
//! Redirects to `/login` if the user is not authenticated.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{self, GuardOutcome};
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Auth guard: bounce to login when the session has no token.
    Effect::new(move || {
        let state = session.get();
        if routes::check_path(routes::HOME_PATH, &state) == GuardOutcome::RedirectToLogin {
            navigate(routes::LOGIN_PATH, NavigateOptions::default());
        }
    });

    let categories =
        LocalResource::new(move || crate::net::api_categories::list_categories(session));

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Clearing the session retriggers the guard effect above.
            crate::state::session::logout(session).await;
        });
    };

    let greeting = move || {
        let state = session.get();
        if state.loading {
            "Loading profile...".to_owned()
        } else {
            state
                .user
                .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.username))
        }
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>{greeting}</h1>
                <nav class="home-page__nav">
                    <a href=routes::ARTICLES_PATH>"Articles"</a>
                    <button class="btn" on:click=on_logout>
                        "Log out"
                    </button>
                </nav>
            </header>

            <section class="home-page__categories">
                <h2>"Categories"</h2>
                <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                    {move || {
                        categories.get().map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="category-list">
                                        {list
                                            .into_iter()
                                            .map(|category| {
                                                view! {
                                                    <li class="category-list__item">
                                                        {category.name}
                                                        <span class="category-list__count">
                                                            {format!(" ({})", category.article_count)}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="home-page__error">
                                        {format!("Could not load categories: {e}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
