//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="landing-page">
            <header class="landing-page__header">
                <h1 class="landing-page__logo">"Qriosity"</h1>
                <nav class="landing-page__nav">
                    <a class="btn" href="/pricing">
                        "Pricing"
                    </a>
                    <Show
                        when=move || session.get().authenticated
                        fallback=|| {
                            view! {
                                <a class="btn" href="/login">
                                    "Log In"
                                </a>
                                <a class="btn btn--primary" href="/register">
                                    "Get Started"
                                </a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href="/home/my-learning">
                            "My Learning"
                        </a>
                    </Show>
                </nav>
            </header>
            <section class="landing-page__hero">
                <h2>"Learn anything, one roadmap at a time."</h2>
                <p>
                    "Curated and AI-assembled learning paths over the best free and paid
                    courses on the web, with a daily challenge to keep you sharp."
                </p>
                <a class="btn btn--primary landing-page__cta" href="/register">
                    "Start learning"
                </a>
            </section>
            <section class="landing-page__features">
                <div class="feature-card">
                    <h3>"Roadmaps"</h3>
                    <p>"Ordered course sequences that take you from zero to shipping."</p>
                </div>
                <div class="feature-card">
                    <h3>"Daily Challenge"</h3>
                    <p>"One rotating question a day, rated with actionable feedback."</p>
                </div>
                <div class="feature-card">
                    <h3>"Build your own"</h3>
                    <p>"Assemble custom roadmaps by hand or let the generator draft one."</p>
                </div>
            </section>
        </div>
    }
}
