//! Login page: username + password against the JWT token endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::state::session::SessionState;

/// Reject blank input before a request goes out. The username is trimmed;
/// the password is taken verbatim since spaces are legal in it.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let credentials = crate::state::session::Credentials {
                username: username_value,
                password: password_value,
            };
            match crate::state::session::login(session, &credentials).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(crate::routes::HOME_PATH);
                    }
                }
                Err(ApiError::Auth(reason)) => {
                    info.set(format!("Login failed: {reason}"));
                    busy.set(false);
                }
                Err(e) => {
                    info.set(format!("Login failed: {e}"));
                    busy.set(false);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Inkflow"</h1>
                <p class="login-card__subtitle">"Sign in to keep writing"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a href=crate::routes::REGISTER_PATH class="login-link">
                    "No account yet? Register"
                </a>
            </div>
        </div>
    }
}
