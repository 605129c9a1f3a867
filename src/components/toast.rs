//! Transient toast notifications.
//!
//! Transport and application failures resolve to one of these: nothing in
//! the client is fatal, every error path returns control to the UI.

use leptos::prelude::*;

use crate::state::ui::{ToastSeverity, UiState};

#[cfg(feature = "csr")]
const TOAST_LIFETIME_SECS: u64 = 4;

fn severity_class(severity: ToastSeverity) -> &'static str {
    match severity {
        ToastSeverity::Success => "toast toast--success",
        ToastSeverity::Warn => "toast toast--warn",
        ToastSeverity::Error => "toast toast--error",
    }
}

/// Queue a toast on the shared UI context and schedule its expiry.
pub fn show_toast(ui: RwSignal<UiState>, severity: ToastSeverity, summary: &str, detail: &str) {
    let mut id = 0;
    ui.update(|state| id = state.push_toast(severity, summary, detail));

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_LIFETIME_SECS)).await;
            ui.update(|state| state.dismiss_toast(id));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Renders the toast queue; clicking a toast dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-host">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=severity_class(toast.severity)
                                on:click=move |_| ui.update(|state| state.dismiss_toast(id))
                            >
                                <span class="toast__summary">{toast.summary}</span>
                                <span class="toast__detail">{toast.detail}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
