//! Articles page: list, create, and delete the user's articles.
//! Redirects to `/login` if the user is not authenticated.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::ArticleListItem;
use crate::routes::{self, GuardOutcome};
use crate::state::session::SessionState;

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Auth guard: bounce to login when the session has no token.
    Effect::new(move || {
        let state = session.get();
        if routes::check_path(routes::ARTICLES_PATH, &state) == GuardOutcome::RedirectToLogin {
            navigate(routes::LOGIN_PATH, NavigateOptions::default());
        }
    });

    let articles = LocalResource::new(move || crate::net::api_articles::list_articles(session));

    // Create-article dialog state.
    let show_create = RwSignal::new(false);
    let new_title = RwSignal::new(String::new());

    let on_create = move |_| {
        show_create.set(true);
        new_title.set(String::new());
    };
    let on_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <div class="articles-page">
            <header class="articles-page__header">
                <h1>"Articles"</h1>
                <nav class="articles-page__nav">
                    <a href=routes::HOME_PATH>"Home"</a>
                    <button class="btn btn--primary" on:click=on_create>
                        "+ New Article"
                    </button>
                </nav>
            </header>

            <Suspense fallback=move || view! { <p>"Loading articles..."</p> }>
                {move || {
                    articles.get().map(|result| match result {
                        Ok(list) => view! { <ArticleRows list=list articles=articles/> }.into_any(),
                        Err(e) => {
                            view! {
                                <p class="articles-page__error">
                                    {format!("Could not load articles: {e}")}
                                </p>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <CreateArticleDialog title=new_title on_cancel=on_cancel articles=articles/>
            </Show>
        </div>
    }
}

/// Article list body with a per-row delete action.
#[component]
fn ArticleRows(
    list: Vec<ArticleListItem>,
    articles: LocalResource<Result<Vec<ArticleListItem>, ApiError>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    if list.is_empty() {
        return view! { <p class="articles-page__empty">"Nothing written yet."</p> }.into_any();
    }
    view! {
        <ul class="article-list">
            {list
                .into_iter()
                .map(|article| {
                    let id = article.id;
                    let on_delete = move |_| {
                        #[cfg(feature = "hydrate")]
                        {
                            let articles = articles.clone();
                            leptos::task::spawn_local(async move {
                                match crate::net::api_articles::delete_article(session, id).await {
                                    Ok(()) => articles.refetch(),
                                    Err(e) => {
                                        leptos::logging::warn!("delete article {id} failed: {e}");
                                    }
                                }
                            });
                        }
                        #[cfg(not(feature = "hydrate"))]
                        {
                            let _ = (id, session, &articles);
                        }
                    };
                    view! {
                        <li class="article-list__item">
                            <span class="article-list__title">{article.title}</span>
                            <span class="article-list__status">{article.status}</span>
                            <button class="btn btn--danger" on:click=on_delete>
                                "Delete"
                            </button>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

/// Modal dialog for creating a new draft article.
#[component]
fn CreateArticleDialog(
    title: RwSignal<String>,
    on_cancel: Callback<()>,
    articles: LocalResource<Result<Vec<ArticleListItem>, ApiError>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let submit = Callback::new(move |()| {
        let title_value = title.get();
        if title_value.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let draft = crate::net::types::ArticleDraft::titled(title_value.trim());
            let articles = articles.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_articles::create_article(session, &draft).await {
                    Ok(_) => {
                        articles.refetch();
                        on_cancel.run(());
                    }
                    Err(e) => leptos::logging::warn!("create article failed: {e}"),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title_value, session, &articles);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Article"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
