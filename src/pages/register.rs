//! Registration page.
//!
//! Registration never establishes a session: on success the user is sent to
//! email confirmation and from there to a fresh login.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "csr"))]
use crate::net::error::{ApiError, AppErrorKind};

/// Validated registration form values.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegistrationInput {
    username: String,
    email: String,
    password: String,
}

/// Validate the form before any network call. Password mismatch and empty
/// required fields never leave the page.
fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegistrationInput, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password != confirm_password {
        return Err("Passwords do not match.");
    }
    Ok(RegistrationInput {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[cfg(any(test, feature = "csr"))]
fn register_error_message(error: &ApiError) -> String {
    match error.kind() {
        Some(AppErrorKind::UserExists) => "That username is already taken.".to_owned(),
        _ => format!("Registration failed: {error}"),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_registration(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(input) => input,
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
                match crate::net::auth::register(&input.username, &input.password, &input.email, &[])
                    .await
                {
                    Ok(()) => {
                        navigate(
                            &format!("/confirm-email?email={}", input.email),
                            NavigateOptions::default(),
                        );
                    }
                    Err(e) => {
                        error.set(register_error_message(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = input;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__logo">"Register"</div>
                <form class="auth-form" on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />

                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />

                    <label for="confirm-password">"Confirm Password"</label>
                    <input
                        id="confirm-password"
                        type="password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />

                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-form__error">{move || error.get()}</div>
                    </Show>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
