//! Card for one catalog course, optionally selectable.

use leptos::prelude::*;

use crate::net::types::Course;

/// A course summary card. With `on_select`, the card becomes clickable and
/// hands the full course back to the caller (picker, builder).
#[component]
pub fn CourseCard(
    course: Course,
    #[prop(optional)] on_select: Option<Callback<Course>>,
) -> impl IntoView {
    let title = course.title.clone();
    let description = course.description.clone();
    let difficulty = course.difficulty.clone();
    let duration = format!("{} hours", course.duration);
    let language = course.language.clone();
    let price = if course.is_free { "Free".to_owned() } else { "Paid".to_owned() };
    let topics = course.topics.clone();
    let selectable = on_select.is_some();

    view! {
        <div
            class="course-card"
            class:course-card--selectable=selectable
            on:click=move |_| {
                if let Some(on_select) = on_select.as_ref() {
                    on_select.run(course.clone());
                }
            }
        >
            <h3 class="course-card__title">{title}</h3>
            <p class="course-card__description">{description}</p>
            <div class="course-card__topics">
                {topics
                    .into_iter()
                    .map(|topic| view! { <span class="topic-chip">{topic}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="course-card__meta">
                <span class="course-card__difficulty">{difficulty}</span>
                <span class="course-card__duration">{duration}</span>
            </div>
            <div class="course-card__meta">
                <span class="course-card__language">{language}</span>
                <span class="course-card__price">{price}</span>
            </div>
        </div>
    }
}
