//! Daily-challenge dialog: question, answer box, rated submit button.

use leptos::prelude::*;

use crate::state::challenge::{ChallengeState, SubmitPhase};

/// Modal dialog running one daily-challenge attempt.
///
/// `on_complete` fires after each accepted submission so the navbar can
/// clear its availability badge; `on_hide` closes the dialog.
#[component]
pub fn DailyChallengeDialog(on_hide: Callback<()>, on_complete: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(ChallengeState::default());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::challenge::fetch_question().await {
            Ok(question) => state.update(|s| *s = s.with_question(question)),
            Err(e) => log::warn!("daily challenge fetch failed: {e}"),
        }
    });

    let on_submit = move |_| {
        if !state.get_untracked().can_submit() {
            return;
        }
        state.update(ChallengeState::begin_submit);

        #[cfg(feature = "csr")]
        {
            let snapshot = state.get_untracked();
            let question = snapshot.question.map(|q| q.question).unwrap_or_default();
            let answer = snapshot.answer;
            leptos::task::spawn_local(async move {
                match crate::net::challenge::submit(&question, &answer).await {
                    Ok(outcome) => {
                        state.update(|s| s.apply_outcome(&outcome));
                        on_complete.run(());
                    }
                    Err(e) => {
                        log::warn!("daily challenge submission failed: {e}");
                        state.update(ChallengeState::submit_failed);
                    }
                }
            });
        }
    };

    let on_next = move |_| {
        if !state.get_untracked().can_advance() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::challenge::fetch_question().await {
                Ok(question) => state.update(|s| *s = s.with_question(question)),
                Err(e) => log::warn!("daily challenge fetch failed: {e}"),
            }
        });
    };

    let question_text = move || {
        state
            .get()
            .question
            .map_or_else(|| "Loading today's question...".to_owned(), |q| q.question)
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_hide.run(())>
            <div class="dialog dialog--challenge" on:click=move |ev| ev.stop_propagation()>
                <h2>"Daily Challenge"</h2>
                <h3 class="challenge__question">{question_text}</h3>
                <textarea
                    class="challenge__answer"
                    rows="5"
                    placeholder="Type your answer here..."
                    prop:value=move || state.get().answer
                    disabled=move || state.get().phase != SubmitPhase::Idle
                    on:input=move |ev| state.update(|s| s.answer = event_target_value(&ev))
                ></textarea>
                <Show when=move || state.get().insight.is_some()>
                    <p class="challenge__insight">
                        {move || state.get().insight.unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || state.get().attempts_left.is_some()>
                    <p class="challenge__attempts">
                        {move || {
                            format!(
                                "{} attempts left today",
                                state.get().attempts_left.unwrap_or_default()
                            )
                        }}
                    </p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_hide.run(())>
                        "Exit"
                    </button>
                    <Show when=move || state.get().can_advance()>
                        <button class="btn" on:click=on_next>
                            "Next"
                        </button>
                    </Show>
                    <button
                        class=move || state.get().submit_class()
                        disabled=move || !state.get().can_submit()
                        on:click=on_submit
                    >
                        {move || state.get().submit_label()}
                    </button>
                </div>
            </div>
        </div>
    }
}
