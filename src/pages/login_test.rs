use super::*;

#[test]
fn validate_login_input_trims_the_username() {
    assert_eq!(
        validate_login_input("  ada  ", "hunter2"),
        Ok(("ada".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert!(validate_login_input("", "hunter2").is_err());
    assert!(validate_login_input("ada", "").is_err());
    assert!(validate_login_input("   ", "hunter2").is_err());
}

#[test]
fn invalid_credentials_render_the_inline_hint() {
    let message = login_error_message(&ApiError::InvalidCredentials);
    assert_eq!(message, "Login failed. Please check your username and password.");
}

#[test]
fn transport_failures_surface_their_cause() {
    let message = login_error_message(&ApiError::Network("timed out".to_owned()));
    assert!(message.contains("timed out"));
}
