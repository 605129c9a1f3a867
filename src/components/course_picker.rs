//! Modal course picker over the paginated catalog.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::net::types::Course;
use crate::state::courses::CourseListState;

fn fetch_next_page(catalog: RwSignal<CourseListState>) {
    catalog.update(|state| state.loading = true);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let request = catalog.get_untracked().next_request();
        match crate::net::courses::get_courses(&request).await {
            Ok(page) => catalog.update(|state| state.absorb_page(page)),
            Err(e) => catalog.update(|state| {
                state.loading = false;
                state.error = Some(e.to_string());
            }),
        }
    });
}

/// Dialog listing catalog courses with search and load-more pagination.
/// Selecting a course hands it to the caller and is expected to close the
/// dialog from there.
#[component]
pub fn CoursePickerDialog(on_select: Callback<Course>, on_cancel: Callback<()>) -> impl IntoView {
    let catalog = RwSignal::new(CourseListState::default());
    let search = RwSignal::new(String::new());

    fetch_next_page(catalog);

    let visible = move || catalog.get().filtered(&search.get());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--picker" on:click=move |ev| ev.stop_propagation()>
                <h2>"Select a Course"</h2>
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Search courses..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <Show when=move || catalog.get().error.is_some()>
                    <p class="dialog__error">{move || catalog.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="dialog__course-list">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|course| view! { <CourseCard course=course on_select=on_select/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="dialog__actions">
                    <Show when=move || !catalog.get().exhausted>
                        <button
                            class="btn"
                            disabled=move || catalog.get().loading
                            on:click=move |_| fetch_next_page(catalog)
                        >
                            {move || if catalog.get().loading { "Loading..." } else { "Load more" }}
                        </button>
                    </Show>
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
