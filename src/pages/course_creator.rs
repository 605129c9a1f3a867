//! Course creator: submit a new catalog course.

#[cfg(test)]
#[path = "course_creator_test.rs"]
mod course_creator_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::route_guard::RequireAuth;
use crate::components::toast::show_toast;
use crate::net::types::Course;
use crate::state::roadmaps::parse_topics;
use crate::state::ui::{ToastSeverity, UiState};

/// Raw form values, all strings the way the inputs hold them.
#[derive(Clone, Debug, Default)]
struct CourseForm {
    title: String,
    url: String,
    source: String,
    description: String,
    topics: String,
    difficulty: String,
    duration: String,
    language: String,
    is_free: bool,
}

/// Validate and convert the form into an upsert input.
fn build_course_input(form: &CourseForm, id: String, author: &str) -> Result<Course, &'static str> {
    let title = form.title.trim();
    let url = form.url.trim();
    if title.is_empty() || url.is_empty() {
        return Err("Title and URL are required.");
    }
    if form.difficulty.is_empty() {
        return Err("Select a difficulty.");
    }
    let Ok(duration) = form.duration.trim().parse::<u32>() else {
        return Err("Duration must be a whole number of hours.");
    };
    if duration == 0 {
        return Err("Duration must be at least one hour.");
    }

    Ok(Course {
        id,
        title: title.to_owned(),
        url: url.to_owned(),
        source: form.source.trim().to_owned(),
        description: form.description.trim().to_owned(),
        topics: parse_topics(&form.topics),
        difficulty: form.difficulty.clone(),
        duration,
        language: form.language.trim().to_owned(),
        is_free: form.is_free,
        author: author.to_owned(),
    })
}

#[component]
pub fn CourseCreatorPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let form = RwSignal::new(CourseForm::default());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let author = crate::net::auth::current_claims()
            .map(|claims| claims.display_name)
            .unwrap_or_default();
        let input = match build_course_input(
            &form.get_untracked(),
            uuid::Uuid::new_v4().to_string(),
            &author,
        ) {
            Ok(input) => input,
            Err(reason) => {
                show_toast(ui, ToastSeverity::Warn, "Course", reason);
                return;
            }
        };
        saving.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::courses::upsert_course(&input).await {
                Ok(()) => {
                    show_toast(ui, ToastSeverity::Success, "Success", "Course added successfully");
                    form.set(CourseForm::default());
                }
                Err(e) => {
                    show_toast(ui, ToastSeverity::Error, "Error", "Failed to add course");
                    log::warn!("course upsert failed: {e}");
                }
            }
            saving.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = input;
            saving.set(false);
        }
    };

    view! {
        <RequireAuth>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__content course-creator">
                    <h2 class="course-creator__title">"Add New Course"</h2>
                    <form class="course-creator__form" on:submit=on_submit>
                        <div class="input-group">
                            <label for="title">"Title"</label>
                            <input
                                id="title"
                                type="text"
                                prop:value=move || form.get().title
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                            />
                        </div>
                        <div class="input-group">
                            <label for="url">"URL"</label>
                            <input
                                id="url"
                                type="text"
                                prop:value=move || form.get().url
                                on:input=move |ev| form.update(|f| f.url = event_target_value(&ev))
                            />
                        </div>
                        <div class="input-group">
                            <label for="source">"Source"</label>
                            <input
                                id="source"
                                type="text"
                                placeholder="e.g. Udemy | FreeCodeCamp | YouTube"
                                prop:value=move || form.get().source
                                on:input=move |ev| form.update(|f| f.source = event_target_value(&ev))
                            />
                        </div>
                        <div class="input-group">
                            <label for="description">"Description"</label>
                            <textarea
                                id="description"
                                prop:value=move || form.get().description
                                on:input=move |ev| {
                                    form.update(|f| f.description = event_target_value(&ev));
                                }
                            ></textarea>
                        </div>
                        <div class="input-group">
                            <label for="topics">"Topics (comma-separated)"</label>
                            <input
                                id="topics"
                                type="text"
                                placeholder="e.g. JavaScript, Web Development, React"
                                prop:value=move || form.get().topics
                                on:input=move |ev| form.update(|f| f.topics = event_target_value(&ev))
                            />
                        </div>
                        <div class="input-group">
                            <label for="difficulty">"Difficulty"</label>
                            <select
                                id="difficulty"
                                prop:value=move || form.get().difficulty
                                on:change=move |ev| {
                                    form.update(|f| f.difficulty = event_target_value(&ev));
                                }
                            >
                                <option value="">"Select difficulty"</option>
                                <option value="Beginner">"Beginner"</option>
                                <option value="Intermediate">"Intermediate"</option>
                                <option value="Advanced">"Advanced"</option>
                            </select>
                        </div>
                        <div class="input-group">
                            <label for="duration">"Duration (in hours)"</label>
                            <input
                                id="duration"
                                type="number"
                                min="1"
                                prop:value=move || form.get().duration
                                on:input=move |ev| {
                                    form.update(|f| f.duration = event_target_value(&ev));
                                }
                            />
                        </div>
                        <div class="input-group">
                            <label for="language">"Language"</label>
                            <input
                                id="language"
                                type="text"
                                placeholder="e.g. EN"
                                prop:value=move || form.get().language
                                on:input=move |ev| {
                                    form.update(|f| f.language = event_target_value(&ev));
                                }
                            />
                        </div>
                        <div class="input-group input-group--inline">
                            <label for="is-free">"Free course"</label>
                            <input
                                id="is-free"
                                type="checkbox"
                                prop:checked=move || form.get().is_free
                                on:change=move |ev| {
                                    form.update(|f| f.is_free = event_target_checked(&ev));
                                }
                            />
                        </div>

                        <button class="btn btn--contrast" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Add Course" }}
                        </button>
                    </form>
                </main>
            </div>
        </RequireAuth>
    }
}
