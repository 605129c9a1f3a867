use super::*;

#[test]
fn validate_registration_accepts_a_complete_form() {
    let input = validate_registration(" ada ", " ada@example.com ", "hunter2", "hunter2")
        .expect("valid form");
    assert_eq!(input.username, "ada");
    assert_eq!(input.email, "ada@example.com");
    assert_eq!(input.password, "hunter2");
}

#[test]
fn validate_registration_rejects_password_mismatch_before_any_call() {
    assert_eq!(
        validate_registration("ada", "ada@example.com", "hunter2", "hunter3"),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_registration_requires_every_field() {
    assert!(validate_registration("", "a@b.com", "x", "x").is_err());
    assert!(validate_registration("ada", "", "x", "x").is_err());
    assert!(validate_registration("ada", "a@b.com", "", "").is_err());
}

#[test]
fn validate_registration_rejects_addresses_without_an_at_sign() {
    assert_eq!(
        validate_registration("ada", "not-an-email", "x", "x"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn existing_account_collisions_get_a_friendly_message() {
    let err = ApiError::Application {
        kind: AppErrorKind::UserExists,
        message: "User already exists".to_owned(),
    };
    assert_eq!(register_error_message(&err), "That username is already taken.");
}
