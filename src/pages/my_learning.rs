//! My Learning: the authenticated landing route listing the viewer's
//! roadmaps.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::roadmap_card::RoadmapCard;
use crate::components::route_guard::RequireAuth;
use crate::state::roadmaps::RoadmapListState;

#[component]
pub fn MyLearningPage() -> impl IntoView {
    let list = RwSignal::new(RoadmapListState { loading: true, ..RoadmapListState::default() });

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::roadmaps::get_roadmaps_by_user().await {
            Ok(items) => list.update(|state| {
                state.items = items;
                state.loading = false;
            }),
            Err(e) => list.update(|state| {
                state.loading = false;
                state.error = Some(e.to_string());
            }),
        }
    });

    view! {
        <RequireAuth>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__content my-learning">
                    <h1>"My Roadmaps"</h1>
                    <Show when=move || list.get().error.is_some()>
                        <p class="page-error">{move || list.get().error.unwrap_or_default()}</p>
                    </Show>
                    <Show
                        when=move || !list.get().loading
                        fallback=|| view! { <p>"Loading roadmaps..."</p> }
                    >
                        <Show
                            when=move || !list.get().items.is_empty()
                            fallback=|| {
                                view! {
                                    <p class="my-learning__empty">
                                        "Nothing here yet. Like a roadmap from the feed or build your own."
                                    </p>
                                }
                            }
                        >
                            <div class="roadmap-grid">
                                {move || {
                                    list.get()
                                        .items
                                        .into_iter()
                                        .map(|roadmap| view! { <RoadmapCard roadmap=roadmap/> })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                    <a class="btn btn--primary my-learning__build" href="/home/builder">
                        "+ Build a roadmap"
                    </a>
                </main>
            </div>
        </RequireAuth>
    }
}
