use super::*;

#[test]
fn push_toast_assigns_increasing_ids() {
    let mut ui = UiState::default();
    let first = ui.push_toast(ToastSeverity::Success, "Saved", "Roadmap saved");
    let second = ui.push_toast(ToastSeverity::Error, "Error", "Network down");
    assert!(second > first);
    assert_eq!(ui.toasts.len(), 2);
}

#[test]
fn dismiss_toast_removes_only_the_target() {
    let mut ui = UiState::default();
    let first = ui.push_toast(ToastSeverity::Warn, "Heads up", "Challenge unavailable");
    let second = ui.push_toast(ToastSeverity::Error, "Error", "Save failed");

    ui.dismiss_toast(first);
    assert_eq!(ui.toasts.len(), 1);
    assert_eq!(ui.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut ui = UiState::default();
    ui.push_toast(ToastSeverity::Success, "Saved", "Done");
    ui.dismiss_toast(99);
    assert_eq!(ui.toasts.len(), 1);
}

#[test]
fn ids_stay_unique_after_dismissals() {
    let mut ui = UiState::default();
    let first = ui.push_toast(ToastSeverity::Success, "a", "a");
    ui.dismiss_toast(first);
    let second = ui.push_toast(ToastSeverity::Success, "b", "b");
    assert_ne!(first, second);
}
