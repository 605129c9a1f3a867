//! Profile: learning-topic editing plus a feedback box.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::route_guard::RequireAuth;
#[cfg(feature = "csr")]
use crate::components::toast::show_toast;
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::state::ui::ToastSeverity;
use crate::state::ui::UiState;

/// Add a trimmed topic, skipping duplicates case-insensitively. Returns a
/// rebuilt list.
fn add_topic(topics: &[String], candidate: &str) -> Vec<String> {
    let candidate = candidate.trim();
    if candidate.is_empty()
        || topics.iter().any(|topic| topic.eq_ignore_ascii_case(candidate))
    {
        return topics.to_vec();
    }
    let mut updated = topics.to_vec();
    updated.push(candidate.to_owned());
    updated
}

/// Remove a topic by exact name. Returns a rebuilt list.
fn remove_topic(topics: &[String], name: &str) -> Vec<String> {
    topics.iter().filter(|topic| topic.as_str() != name).cloned().collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let topics = RwSignal::new(Vec::<String>::new());
    let suggestions = RwSignal::new(Vec::<String>::new());
    let new_topic = RwSignal::new(String::new());
    let feedback = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::users::get_current_account().await {
            Ok(account) => topics.set(account.topics),
            Err(e) => log::warn!("profile fetch failed: {e}"),
        }
        match crate::net::topics::get_all_topics().await {
            Ok(names) => suggestions.set(names),
            Err(e) => log::warn!("topic catalog fetch failed: {e}"),
        }
    });

    // Catalog topics the user has not picked yet.
    let open_suggestions = move || {
        let chosen = topics.get();
        suggestions
            .get()
            .into_iter()
            .filter(|name| !chosen.iter().any(|topic| topic.eq_ignore_ascii_case(name)))
            .collect::<Vec<_>>()
    };

    let display_name = move || {
        session
            .get()
            .display_name
            .unwrap_or_else(|| "learner".to_owned())
    };

    let on_add_topic = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        topics.update(|current| *current = add_topic(current, &new_topic.get_untracked()));
        new_topic.set(String::new());
    };

    let on_save_topics = move |_| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);

        #[cfg(feature = "csr")]
        {
            let names = topics.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::users::update_topics(&names).await {
                    Ok(()) => {
                        // Register any new names so feeds and challenges can
                        // draw from them.
                        if let Err(e) = crate::net::topics::add_topics(&names).await {
                            log::warn!("topic registration failed: {e}");
                        }
                        show_toast(ui, ToastSeverity::Success, "Success", "Topics saved");
                    }
                    Err(e) => {
                        show_toast(ui, ToastSeverity::Error, "Error", "Failed to save topics");
                        log::warn!("topics update failed: {e}");
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            saving.set(false);
        }
    };

    let on_send_feedback = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = feedback.get_untracked().trim().to_owned();
        if text.is_empty() {
            return;
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if crate::net::users::send_feedback(&text).await {
                show_toast(ui, ToastSeverity::Success, "Thanks!", "Feedback sent");
                feedback.set(String::new());
            } else {
                show_toast(ui, ToastSeverity::Error, "Error", "Failed to send feedback");
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
        }
    };

    view! {
        <RequireAuth>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__content profile">
                    <div class="profile__header">
                        <h1>{display_name}</h1>
                    </div>

                    <section class="profile__topics">
                        <h3>"Learning Topics"</h3>
                        <div class="profile__topic-chips">
                            {move || {
                                topics
                                    .get()
                                    .into_iter()
                                    .map(|topic| {
                                        let name = topic.clone();
                                        view! {
                                            <span
                                                class="topic-chip topic-chip--removable"
                                                title="Remove topic"
                                                on:click=move |_| {
                                                    topics.update(|current| {
                                                        *current = remove_topic(current, &name);
                                                    });
                                                }
                                            >
                                                {topic}
                                            </span>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                        <Show when=move || !open_suggestions().is_empty()>
                            <p class="profile__suggestions-label">"Suggestions"</p>
                            <div class="profile__topic-chips">
                                {move || {
                                    open_suggestions()
                                        .into_iter()
                                        .map(|name| {
                                            let value = name.clone();
                                            view! {
                                                <span
                                                    class="topic-chip topic-chip--suggested"
                                                    title="Add topic"
                                                    on:click=move |_| {
                                                        topics.update(|current| {
                                                            *current = add_topic(current, &value);
                                                        });
                                                    }
                                                >
                                                    {name}
                                                </span>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                        <form class="profile__add-topic" on:submit=on_add_topic>
                            <input
                                type="text"
                                placeholder="New topic"
                                prop:value=move || new_topic.get()
                                on:input=move |ev| new_topic.set(event_target_value(&ev))
                            />
                            <button class="btn" type="submit">
                                "Add Topic"
                            </button>
                        </form>
                        <button
                            class="btn btn--contrast"
                            disabled=move || saving.get()
                            on:click=on_save_topics
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </section>

                    <section class="profile__feedback">
                        <h3>"Feedback"</h3>
                        <form on:submit=on_send_feedback>
                            <textarea
                                placeholder="Tell us what to improve..."
                                prop:value=move || feedback.get()
                                on:input=move |ev| feedback.set(event_target_value(&ev))
                            ></textarea>
                            <button class="btn" type="submit">
                                "Send"
                            </button>
                        </form>
                    </section>
                </main>
            </div>
        </RequireAuth>
    }
}
