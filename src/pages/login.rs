//! Login page: credential form plus the federated-login redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "csr"))]
use crate::net::error::ApiError;
use crate::state::session::SessionState;

/// Hosted identity-provider entry point for federated sign-in. The provider
/// redirects back with an authorization artifact the backend understands.
#[cfg(feature = "csr")]
const FEDERATED_LOGIN_URL: &str =
    "https://auth.qriosity.app/oauth2/authorize?client_id=qriosity-web&response_type=token";

/// Validate the credential form before any network call.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Inline error text for a failed login call.
#[cfg(any(test, feature = "csr"))]
fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::InvalidCredentials => {
            "Login failed. Please check your username and password.".to_owned()
        }
        other => format!("Login failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(reason) => {
                    error.set(reason.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::login(&username_value, &password_value).await {
                    Ok(claims) => {
                        session.set(SessionState::after_login(&claims));
                        navigate("/home/my-learning", NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(login_error_message(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username_value, password_value, session);
        }
    };

    let on_federated = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(FEDERATED_LOGIN_URL);
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__logo">"Login"</div>
                <form class="auth-form" on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />

                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-form__error">{move || error.get()}</div>
                    </Show>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Log In"
                    </button>
                </form>
                <div class="auth-card__divider">
                    <span>"or"</span>
                </div>
                <button class="btn auth-card__federated" on:click=on_federated>
                    "Sign in with Google"
                </button>
                <p class="auth-card__switch">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
