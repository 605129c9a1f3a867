use super::*;
use crate::session::claims::IdentityClaims;

#[test]
fn unauthenticated_session_redirects_to_login() {
    let session = SessionState::default();
    assert_eq!(evaluate(&session), GuardOutcome::RedirectToLogin);
}

#[test]
fn authenticated_session_renders_the_subtree() {
    let claims = IdentityClaims {
        subject_id: "u-1".to_owned(),
        display_name: "ada".to_owned(),
    };
    let session = SessionState::after_login(&claims);
    assert_eq!(evaluate(&session), GuardOutcome::Allow);
}

#[test]
fn decision_is_deterministic_for_both_states() {
    let unauth = SessionState::default();
    let auth = SessionState {
        authenticated: true,
        display_name: Some("ada".to_owned()),
    };
    for _ in 0..3 {
        assert_eq!(evaluate(&unauth), GuardOutcome::RedirectToLogin);
        assert_eq!(evaluate(&auth), GuardOutcome::Allow);
    }
}

#[test]
fn logout_transition_flips_the_decision() {
    let claims = IdentityClaims {
        subject_id: "u-1".to_owned(),
        display_name: "ada".to_owned(),
    };
    let session = SessionState::after_login(&claims);
    assert_eq!(evaluate(&session), GuardOutcome::Allow);
    assert_eq!(evaluate(&SessionState::after_logout()), GuardOutcome::RedirectToLogin);
}
