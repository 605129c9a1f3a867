use super::*;
use crate::net::graphql::unwrap_response;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn stub_token(username: &str, user_id: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        format!(r#"{{"userId":"{user_id}","username":"{username}","exp":1893456000}}"#)
            .as_bytes(),
    );
    format!("{header}.{payload}.stub-signature")
}

#[test]
fn login_response_yields_token_payload() {
    let body = format!(r#"{{"data":{{"login":{{"token":"{}"}}}}}}"#, stub_token("ada", "u-1"));
    let data = unwrap_response(&body).expect("data");
    let payload: AuthPayload = graphql::decode_field(data, "login").expect("login field");
    let identity = claims::decode(&payload.token).expect("claims");
    assert_eq!(identity.display_name, "ada");
    assert_eq!(identity.subject_id, "u-1");
}

#[test]
fn rejected_credentials_surface_invalid_credentials() {
    let body = r#"{"data":null,"errors":[{"message":"invalid email or password"}]}"#;
    assert_eq!(unwrap_response(body), Err(ApiError::InvalidCredentials));
}

#[test]
fn is_authenticated_tracks_stored_token() {
    token_store::clear();
    assert!(!is_authenticated());

    token_store::save(&stub_token("ada", "u-1"));
    assert!(is_authenticated());

    logout();
    assert!(!is_authenticated());
}

#[test]
fn logout_is_idempotent_and_empties_the_store() {
    token_store::save(&stub_token("ada", "u-1"));
    logout();
    logout();
    assert_eq!(token_store::read(), None);
}

#[test]
fn current_claims_absent_token_yields_no_identity() {
    token_store::clear();
    assert_eq!(current_claims(), None);
}

#[test]
fn current_claims_undecodable_token_yields_no_identity() {
    token_store::save("not-a-jwt");
    assert_eq!(current_claims(), None);
    token_store::clear();
}

#[test]
fn current_claims_reads_display_identity_back() {
    token_store::save(&stub_token("grace", "u-2"));
    let identity = current_claims().expect("claims");
    assert_eq!(identity.display_name, "grace");
    token_store::clear();
}

#[test]
fn confirmation_ack_parses_success_flag() {
    let data = unwrap_response(r#"{"data":{"confirmEmail":{"success":true}}}"#).expect("data");
    let ack: Acknowledged = graphql::decode_field(data, "confirmEmail").expect("ack");
    assert!(ack.success);
}
