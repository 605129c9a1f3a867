//! Navigation guard for authenticated routes.
//!
//! Not a security boundary: authorization is enforced server-side on every
//! call. This only keeps unauthenticated navigation from rendering screens
//! whose data loads would all fail anyway.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// What the guard decided for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the wrapped subtree.
    Allow,
    /// Render a redirect to the login entry point instead.
    RedirectToLogin,
}

/// Pure guard decision, re-evaluated whenever the session context changes.
pub fn evaluate(session: &SessionState) -> GuardOutcome {
    if session.authenticated {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Wrap a subtree that requires an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if evaluate(&session.get()) == GuardOutcome::RedirectToLogin {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || evaluate(&session.get()) == GuardOutcome::Allow
            fallback=|| view! { <p class="guard-redirect">"Redirecting to login..."</p> }
        >
            {children()}
        </Show>
    }
}
