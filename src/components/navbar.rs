//! Sidebar navigation shell for authenticated screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session context for the display name and is the only place
//! that fires the logout transition. Challenge availability is fetched once
//! on mount; the dialog clears the badge through a callback after a
//! submission is accepted.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::daily_challenge::DailyChallengeDialog;
use crate::components::toast::show_toast;
use crate::state::session::SessionState;
use crate::state::ui::{ToastSeverity, UiState};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let challenge_available = RwSignal::new(false);
    let show_challenge = RwSignal::new(false);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::challenge::availability().await {
            Ok(available) => challenge_available.set(available),
            Err(e) => log::warn!("challenge availability fetch failed: {e}"),
        }
    });

    let username = move || {
        session
            .get()
            .display_name
            .unwrap_or_else(|| "learner".to_owned())
    };

    let on_challenge_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if challenge_available.get_untracked() {
            show_challenge.set(true);
        } else {
            show_toast(ui, ToastSeverity::Warn, "Daily Challenge", "Challenge not available");
        }
    };

    let on_logout = move |_| {
        // Flip the flag before touching the store so no subscriber ever
        // observes an authenticated session without a token.
        session.set(SessionState::after_logout());
        crate::net::auth::logout();
        navigate("/login", NavigateOptions::default());
    };

    let on_challenge_hide = Callback::new(move |()| show_challenge.set(false));
    let on_challenge_complete = Callback::new(move |()| challenge_available.set(false));

    view! {
        <nav class="sidebar">
            <Show when=move || show_challenge.get()>
                <DailyChallengeDialog on_hide=on_challenge_hide on_complete=on_challenge_complete/>
            </Show>

            <div class="sidebar__main">
                <div class="sidebar__logo">
                    <h2>"Qriosity"</h2>
                </div>
                <ul class="nav-list">
                    <li class="nav-group">
                        <h3>"Main"</h3>
                        <ul>
                            <li>
                                <a class="nav-link" href="/home/my-learning">
                                    "My Learning"
                                </a>
                            </li>
                            <li>
                                <a class="nav-link" href="#" on:click=on_challenge_click>
                                    "Daily Challenge"
                                    <Show when=move || challenge_available.get()>
                                        <span class="nav-link__badge">"New"</span>
                                    </Show>
                                </a>
                            </li>
                        </ul>
                    </li>
                    <li class="nav-group">
                        <h3>"Explore"</h3>
                        <ul>
                            <li>
                                <a class="nav-link" href="/home/roadmaps">
                                    "Roadmaps"
                                </a>
                            </li>
                            <li>
                                <a class="nav-link" href="/home/builder">
                                    "Roadmap Builder"
                                </a>
                            </li>
                            <li>
                                <a class="nav-link" href="/home/courses/new">
                                    "Add Course"
                                </a>
                            </li>
                        </ul>
                    </li>
                </ul>
            </div>
            <div class="sidebar__user">
                <a class="sidebar__user-name" href="/home/profile">
                    {username}
                </a>
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
