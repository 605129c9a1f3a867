//! Transient UI chrome state: toast notifications.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Warn,
    Error,
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub severity: ToastSeverity,
    pub summary: String,
    pub detail: String,
}

/// Shared UI state provided as a signal context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push_toast(&mut self, severity: ToastSeverity, summary: &str, detail: &str) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            severity,
            summary: summary.to_owned(),
            detail: detail.to_owned(),
        });
        id
    }

    /// Drop a toast by id; unknown ids are ignored.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
