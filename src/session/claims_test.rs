use super::*;

fn stub_token(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{header}.{body}.stub-signature")
}

#[test]
fn decode_extracts_subject_and_display_name() {
    let token = stub_token(r#"{"userId":"u-1","username":"ada","exp":1893456000}"#);
    let claims = decode(&token).expect("valid token");
    assert_eq!(claims.subject_id, "u-1");
    assert_eq!(claims.display_name, "ada");
}

#[test]
fn decode_ignores_the_signature_segment() {
    let token = stub_token(r#"{"userId":"u-1","username":"ada"}"#);
    let tampered = format!("{}{}", token, "garbage");
    assert!(decode(&tampered).is_ok());
}

#[test]
fn decode_rejects_non_compact_input() {
    assert_eq!(decode("not-a-jwt"), Err(MalformedToken));
    assert_eq!(decode("too.many.segments.here"), Err(MalformedToken));
    assert_eq!(decode(""), Err(MalformedToken));
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert_eq!(decode("aGVhZGVy.%%%.c2ln"), Err(MalformedToken));
}

#[test]
fn decode_rejects_missing_claims() {
    let token = stub_token(r#"{"exp":1893456000}"#);
    assert_eq!(decode(&token), Err(MalformedToken));
}
