//! Upsell card shown when the plan's roadmap views are exhausted.

use leptos::prelude::*;

#[component]
pub fn OutOfViewsCard() -> impl IntoView {
    view! {
        <div class="out-card">
            <p class="out-card__text">
                "No roadmap views remaining, consider upgrading your plan."
            </p>
            <a class="btn btn--primary" href="/pricing">
                "Subscribe"
            </a>
        </div>
    }
}
