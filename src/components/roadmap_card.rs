//! Card for one roadmap in a feed or list.

use leptos::prelude::*;

use crate::net::types::Roadmap;

/// A clickable roadmap summary card linking to the detail view. With
/// `on_like`, a like button is rendered that reports the roadmap id.
#[component]
pub fn RoadmapCard(
    roadmap: Roadmap,
    #[prop(optional)] on_like: Option<Callback<String>>,
) -> impl IntoView {
    let href = format!("/home/roadmap/{}", roadmap.id);
    let like_id = roadmap.id.clone();
    let title = roadmap.title.clone();
    let author = format!("By: {}", roadmap.author);
    let topics = roadmap.topics.clone();
    let difficulty = roadmap.difficulty.clone();
    let likes = roadmap.likes;
    let liked = roadmap.liked;
    let is_custom = roadmap.is_custom;

    let on_like_click = Callback::new(move |()| {
        if let Some(on_like) = on_like.as_ref() {
            on_like.run(like_id.clone());
        }
    });

    view! {
        <a class="roadmap-card" href=href>
            <div class="roadmap-card__title">{title}</div>
            <div class="roadmap-card__author">{author}</div>
            <div class="roadmap-card__topics">
                {topics
                    .into_iter()
                    .map(|topic| view! { <span class="topic-chip">{topic}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="roadmap-card__meta">
                <span class="roadmap-card__difficulty">{difficulty}</span>
                <button
                    class="roadmap-card__likes"
                    class:roadmap-card__likes--liked=liked
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_like_click.run(());
                    }
                    title="Like this roadmap"
                >
                    {format!("{} {likes}", if liked { "♥" } else { "♡" })}
                </button>
                <Show when=move || is_custom>
                    <span class="roadmap-card__custom-badge">"Custom"</span>
                </Show>
            </div>
        </a>
    }
}
