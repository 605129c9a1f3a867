//! Roadmap builder: the multi-step wizard for assembling a learning path.
//!
//! ARCHITECTURE
//! ============
//! Metadata form + ordered course sequence + optional AI draft. Sequence
//! edits go through the pure transitions in `state::roadmaps` so every
//! update replaces the list outright. Saving uploads nothing itself; the
//! thumbnail component publishes a hosted URL ahead of time.

#[cfg(test)]
#[path = "roadmap_builder_test.rs"]
mod roadmap_builder_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::course_card::CourseCard;
use crate::components::course_picker::CoursePickerDialog;
use crate::components::navbar::Navbar;
use crate::components::route_guard::RequireAuth;
use crate::components::thumbnail_input::ThumbnailInput;
use crate::components::toast::show_toast;
use crate::net::types::Course;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::{Roadmap, RoadmapInput};
#[cfg(any(test, feature = "csr"))]
use crate::state::roadmaps::{parse_topics, topics_field};
use crate::state::roadmaps::{insert_course, move_course_down, move_course_up, remove_course};
use crate::state::ui::{ToastSeverity, UiState};

/// Form values collected by the builder.
#[derive(Clone, Debug, Default)]
struct BuilderForm {
    title: String,
    description: String,
    difficulty: String,
    topics: String,
    image_url: Option<String>,
}

/// Assemble the upsert input. Course ids keep the sequence order; that
/// ordering is the prescribed learning path.
#[cfg(any(test, feature = "csr"))]
fn build_roadmap_input(
    id: String,
    form: &BuilderForm,
    sequence: &[Course],
    author: &str,
) -> RoadmapInput {
    RoadmapInput {
        id,
        title: form.title.trim().to_owned(),
        author: author.to_owned(),
        description: form.description.trim().to_owned(),
        course_ids: sequence.iter().map(|course| course.id.clone()).collect(),
        topics: parse_topics(&form.topics),
        is_custom: true,
        created_by: author.to_owned(),
        likes: 0,
        difficulty: form.difficulty.clone(),
        image_url: form.image_url.clone().unwrap_or_default(),
    }
}

/// Validate the wizard before saving.
fn validate_builder(form: &BuilderForm, sequence: &[Course]) -> Result<(), &'static str> {
    if form.title.trim().is_empty() {
        return Err("Give the roadmap a title.");
    }
    if sequence.is_empty() {
        return Err("Add at least one course.");
    }
    Ok(())
}

/// Fold an AI-generated draft into the form, replacing the sequence.
#[cfg(any(test, feature = "csr"))]
fn apply_generated(form: &mut BuilderForm, generated: &Roadmap) -> Vec<Course> {
    form.title = generated.title.clone();
    form.description = generated.description.clone();
    form.difficulty = generated.difficulty.clone();
    form.topics = topics_field(&generated.topics);
    generated.courses.clone()
}

#[component]
pub fn RoadmapBuilderPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let difficulty = RwSignal::new("Beginner".to_owned());
    let topics = RwSignal::new(String::new());
    let prompt = RwSignal::new(String::new());
    let image_url = RwSignal::new(None::<String>);
    let sequence = RwSignal::new(Vec::<Course>::new());

    let picker_open = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let generating = RwSignal::new(false);

    let current_form = move || BuilderForm {
        title: title.get_untracked(),
        description: description.get_untracked(),
        difficulty: difficulty.get_untracked(),
        topics: topics.get_untracked(),
        image_url: image_url.get_untracked(),
    };

    let on_generate = move |_| {
        if generating.get_untracked() {
            return;
        }
        generating.set(true);

        #[cfg(feature = "csr")]
        {
            let prompt_value = prompt.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::roadmaps::request_custom_roadmap(&prompt_value).await {
                    Ok(generated) => {
                        let mut form = BuilderForm::default();
                        let courses = apply_generated(&mut form, &generated);
                        title.set(form.title);
                        description.set(form.description);
                        difficulty.set(form.difficulty);
                        topics.set(form.topics);
                        sequence.set(courses);
                    }
                    Err(e) => {
                        show_toast(ui, ToastSeverity::Error, "Error", "Failed to auto-generate roadmap");
                        log::warn!("roadmap generation failed: {e}");
                    }
                }
                generating.set(false);
            });
        }
    };

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let form = current_form();
        let courses = sequence.get_untracked();
        if let Err(reason) = validate_builder(&form, &courses) {
            show_toast(ui, ToastSeverity::Warn, "Roadmap", reason);
            return;
        }
        saving.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let author = crate::net::auth::current_claims()
                    .map(|claims| claims.display_name)
                    .unwrap_or_default();
                let input = build_roadmap_input(
                    uuid::Uuid::new_v4().to_string(),
                    &form,
                    &courses,
                    &author,
                );
                let roadmap_id = input.id.clone();
                match crate::net::roadmaps::upsert_roadmap(&input).await {
                    Ok(()) => {
                        show_toast(ui, ToastSeverity::Success, "Success", "Roadmap saved");
                        navigate(&format!("/home/roadmap/{roadmap_id}"), NavigateOptions::default());
                    }
                    Err(e) => {
                        show_toast(ui, ToastSeverity::Error, "Error", "Failed to save roadmap");
                        log::warn!("roadmap save failed: {e}");
                        saving.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (form, courses);
        }
    };

    let on_course_selected = Callback::new(move |course: Course| {
        sequence.update(|current| *current = insert_course(current, course));
        picker_open.set(false);
    });
    let on_picker_cancel = Callback::new(move |()| picker_open.set(false));

    view! {
        <RequireAuth>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__content roadmap-builder">
                    <div class="roadmap-builder__sequence">
                        <ul class="course-list">
                            {move || {
                                sequence
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, course)| {
                                        let course_id = course.id.clone();
                                        view! {
                                            <li class="course-list__item course-list__item--editable">
                                                <CourseCard course=course/>
                                                <div class="course-list__actions">
                                                    <button
                                                        class="btn btn--icon"
                                                        title="Move up"
                                                        on:click=move |_| {
                                                            sequence.update(|s| *s = move_course_up(s, index));
                                                        }
                                                    >
                                                        "↑"
                                                    </button>
                                                    <button
                                                        class="btn btn--icon btn--danger"
                                                        title="Remove"
                                                        on:click=move |_| {
                                                            sequence.update(|s| *s = remove_course(s, &course_id));
                                                        }
                                                    >
                                                        "✕"
                                                    </button>
                                                    <button
                                                        class="btn btn--icon"
                                                        title="Move down"
                                                        on:click=move |_| {
                                                            sequence.update(|s| *s = move_course_down(s, index));
                                                        }
                                                    >
                                                        "↓"
                                                    </button>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                        <button class="roadmap-builder__add" on:click=move |_| picker_open.set(true)>
                            "+ Add new course"
                        </button>
                    </div>

                    <div class="roadmap-builder__details">
                        <div class="roadmap-builder__prompt">
                            <input
                                type="text"
                                placeholder="Roadmap Topic"
                                prop:value=move || prompt.get()
                                on:input=move |ev| prompt.set(event_target_value(&ev))
                            />
                            <button
                                class="btn btn--contrast"
                                disabled=move || generating.get()
                                on:click=on_generate
                            >
                                {move || if generating.get() { "Generating..." } else { "Auto Generate" }}
                            </button>
                        </div>

                        <div class="input-group">
                            <label for="roadmap-title">"Roadmap Title"</label>
                            <input
                                id="roadmap-title"
                                type="text"
                                placeholder="Enter roadmap title"
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="input-group">
                            <label for="roadmap-description">"Description"</label>
                            <textarea
                                id="roadmap-description"
                                placeholder="Enter roadmap description"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="input-group">
                            <label for="roadmap-difficulty">"Difficulty"</label>
                            <select
                                id="roadmap-difficulty"
                                on:change=move |ev| difficulty.set(event_target_value(&ev))
                                prop:value=move || difficulty.get()
                            >
                                <option value="Beginner">"Beginner"</option>
                                <option value="Intermediate">"Intermediate"</option>
                                <option value="Advanced">"Advanced"</option>
                            </select>
                        </div>
                        <div class="input-group">
                            <label for="roadmap-topics">"Topics (comma-separated)"</label>
                            <input
                                id="roadmap-topics"
                                type="text"
                                placeholder="e.g. JavaScript, Web Development, Frontend"
                                prop:value=move || topics.get()
                                on:input=move |ev| topics.set(event_target_value(&ev))
                            />
                        </div>

                        <ThumbnailInput image_url=image_url/>

                        <button
                            class="btn btn--contrast roadmap-builder__save"
                            disabled=move || saving.get()
                            on:click=on_save
                        >
                            {move || if saving.get() { "Saving..." } else { "Save Roadmap" }}
                        </button>
                    </div>

                    <Show when=move || picker_open.get()>
                        <CoursePickerDialog
                            on_select=on_course_selected
                            on_cancel=on_picker_cancel
                        />
                    </Show>
                </main>
            </div>
        </RequireAuth>
    }
}
