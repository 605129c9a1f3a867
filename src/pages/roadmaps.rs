//! Roadmap feed: topic-matched roadmaps with optimistic like toggling.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::roadmap_card::RoadmapCard;
use crate::components::route_guard::RequireAuth;
#[cfg(feature = "csr")]
use crate::components::toast::show_toast;
use crate::state::roadmaps::{RoadmapListState, toggle_like};
#[cfg(feature = "csr")]
use crate::state::ui::ToastSeverity;
use crate::state::ui::UiState;

#[component]
pub fn RoadmapFeedPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let feed = RwSignal::new(RoadmapListState { loading: true, ..RoadmapListState::default() });

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::roadmaps::get_roadmap_feed().await {
            Ok(items) => {
                // Accounts with no topic matches yet fall back to the
                // curated catalog instead of an empty feed.
                let items = if items.is_empty() {
                    crate::net::roadmaps::get_roadmaps().await.unwrap_or_default()
                } else {
                    items
                };
                feed.update(|state| {
                    state.items = items;
                    state.loading = false;
                });
            }
            Err(e) => feed.update(|state| {
                state.loading = false;
                state.error = Some(e.to_string());
            }),
        }
    });

    let on_like = Callback::new(move |roadmap_id: String| {
        let already_liked = feed
            .get_untracked()
            .items
            .iter()
            .any(|roadmap| roadmap.id == roadmap_id && roadmap.liked);
        if already_liked {
            return;
        }

        // Optimistic update: replace the list, then confirm with the
        // backend and roll back by re-applying the same toggle on failure.
        feed.update(|state| state.items = toggle_like(&state.items, &roadmap_id));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::roadmaps::like_roadmap(&roadmap_id).await {
                feed.update(|state| state.items = toggle_like(&state.items, &roadmap_id));
                show_toast(ui, ToastSeverity::Error, "Error", &e.to_string());
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = ui;
        }
    });

    view! {
        <RequireAuth>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__content roadmap-feed">
                    <h1>"Roadmaps for you"</h1>
                    <Show when=move || feed.get().error.is_some()>
                        <p class="page-error">{move || feed.get().error.unwrap_or_default()}</p>
                    </Show>
                    <Show
                        when=move || !feed.get().loading
                        fallback=|| view! { <p>"Loading roadmaps..."</p> }
                    >
                        <div class="roadmap-grid">
                            {move || {
                                feed.get()
                                    .items
                                    .into_iter()
                                    .map(|roadmap| {
                                        view! { <RoadmapCard roadmap=roadmap on_like=on_like/> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </main>
            </div>
        </RequireAuth>
    }
}
