//! Roadmap detail: the resolved course sequence plus roadmap stats.
//!
//! ERROR HANDLING
//! ==============
//! The two interesting application failures are matched by typed kind:
//! exhausted views render the upsell card, a missing roadmap renders a
//! not-found card. Everything else becomes a toast.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::course_card::CourseCard;
use crate::components::navbar::Navbar;
use crate::components::out_of_views::OutOfViewsCard;
use crate::components::route_guard::RequireAuth;
#[cfg(feature = "csr")]
use crate::net::error::AppErrorKind;
use crate::net::types::{Course, Roadmap};

/// What the detail route is currently showing.
#[derive(Clone, Debug, Default)]
enum DetailStatus {
    #[default]
    Loading,
    Fetched(Box<Roadmap>),
    NoViewsRemaining,
    NotFound,
    Failed(String),
}

#[component]
pub fn RoadmapDetailPage() -> impl IntoView {
    let params = use_params_map();
    let status = RwSignal::new(DetailStatus::Loading);

    #[cfg(feature = "csr")]
    {
        let roadmap_id = params.get_untracked().get("id").unwrap_or_default();
        leptos::task::spawn_local(async move {
            match crate::net::roadmaps::get_roadmap_by_id(&roadmap_id).await {
                Ok(roadmap) => status.set(DetailStatus::Fetched(Box::new(roadmap))),
                Err(e) => status.set(match e.kind() {
                    Some(AppErrorKind::NoViewsRemaining) => DetailStatus::NoViewsRemaining,
                    Some(AppErrorKind::RoadmapNotFound) => DetailStatus::NotFound,
                    _ => DetailStatus::Failed(e.to_string()),
                }),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = params;
    }

    let on_course_select = Callback::new(move |course: Course| {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url(&course.url);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = course;
        }
    });

    let body = move || match status.get() {
        DetailStatus::Loading => view! { <p>"Loading roadmap..."</p> }.into_any(),
        DetailStatus::NoViewsRemaining => view! { <OutOfViewsCard/> }.into_any(),
        DetailStatus::NotFound => view! {
            <div class="page-error">
                <h2>"Roadmap not found"</h2>
                <a class="btn" href="/home/roadmaps">
                    "Back to roadmaps"
                </a>
            </div>
        }
        .into_any(),
        DetailStatus::Failed(message) => {
            view! { <p class="page-error">{message}</p> }.into_any()
        }
        DetailStatus::Fetched(roadmap) => {
            let course_count = roadmap.courses.len();
            let courses = roadmap.courses.clone();
            let topics = roadmap.topics.clone();
            let is_custom = roadmap.is_custom;
            view! {
                <div class="roadmap-detail">
                    <div class="roadmap-detail__courses">
                        <ul class="course-list">
                            {courses
                                .into_iter()
                                .map(|course| {
                                    view! {
                                        <li class="course-list__item">
                                            <CourseCard course=course on_select=on_course_select/>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div class="roadmap-detail__summary">
                        <h2 class="roadmap-detail__title">{roadmap.title.clone()}</h2>
                        <p class="roadmap-detail__author">{format!("by {}", roadmap.author)}</p>
                        <div class="roadmap-detail__stats">
                            <div class="stat-item">
                                <div class="stat-item__value">{course_count}</div>
                                <div class="stat-item__label">"Courses"</div>
                            </div>
                            <div class="stat-item">
                                <div class="stat-item__value">{roadmap.difficulty.clone()}</div>
                                <div class="stat-item__label">"Difficulty"</div>
                            </div>
                            <div class="stat-item">
                                <div class="stat-item__value">{roadmap.likes}</div>
                                <div class="stat-item__label">"Likes"</div>
                            </div>
                        </div>
                        <div class="roadmap-detail__topics">
                            {topics
                                .into_iter()
                                .map(|topic| view! { <span class="topic-chip">{topic}</span> })
                                .collect::<Vec<_>>()}
                        </div>
                        <Show when=move || is_custom>
                            <p class="roadmap-detail__custom">"Custom"</p>
                        </Show>
                        <i class="roadmap-detail__description">{roadmap.description.clone()}</i>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <RequireAuth>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__content">{body}</main>
            </div>
        </RequireAuth>
    }
}
