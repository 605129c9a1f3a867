//! Email confirmation page: one-time code entry plus a resend action.
//!
//! Both remote calls fail soft (`false`), so every failure path lands in
//! inline retry UI rather than an error boundary.

#[cfg(test)]
#[path = "confirm_email_test.rs"]
mod confirm_email_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

#[cfg(feature = "csr")]
use crate::components::toast::show_toast;
#[cfg(feature = "csr")]
use crate::state::ui::ToastSeverity;
use crate::state::ui::UiState;

/// Validate the confirmation code field.
fn validate_code(code: &str) -> Result<String, &'static str> {
    let code = code.trim();
    if code.is_empty() {
        return Err("Enter the confirmation code from your email.");
    }
    Ok(code.to_owned())
}

#[component]
pub fn ConfirmEmailPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = Memo::new(move |_| query.read().get("email").unwrap_or_default());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let code_value = match validate_code(&code.get_untracked()) {
            Ok(value) => value,
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
            let email_value = email.get_untracked();
            leptos::task::spawn_local(async move {
                if crate::net::auth::confirm_email(&email_value, &code_value).await {
                    navigate("/login", NavigateOptions::default());
                } else {
                    error.set("Email confirmation failed. Check the code and try again.".to_owned());
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = code_value;
        }
    };

    let on_resend = move |_| {
        #[cfg(feature = "csr")]
        {
            let email_value = email.get_untracked();
            leptos::task::spawn_local(async move {
                if crate::net::auth::resend_confirmation(&email_value).await {
                    show_toast(ui, ToastSeverity::Success, "Success", "Confirmation email resent");
                } else {
                    show_toast(ui, ToastSeverity::Error, "Error", "Failed to resend confirmation email");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ui;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__logo">"Confirm Email"</div>
                <p class="auth-card__hint">
                    "A confirmation email was sent to "
                    <strong>{move || email.get()}</strong>
                    ". Enter the code below to confirm your address."
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="code">"Confirmation Code"</label>
                    <input
                        id="code"
                        type="text"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />

                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-form__error">{move || error.get()}</div>
                    </Show>

                    <div class="auth-form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Confirm"
                        </button>
                        <button class="btn" type="button" on:click=on_resend>
                            "Resend"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
