use super::*;

#[test]
fn bearer_header_wraps_present_token() {
    assert_eq!(bearer_header(Some("tok")), Some("Bearer tok".to_owned()));
}

#[test]
fn bearer_header_absent_token_leaves_request_undecorated() {
    assert_eq!(bearer_header(None), None);
}

#[test]
fn error_from_message_maps_credential_rejections() {
    assert_eq!(
        error_from_message("invalid email or password"),
        ApiError::InvalidCredentials
    );
    assert_eq!(
        error_from_message("invalid username or password"),
        ApiError::InvalidCredentials
    );
}

#[test]
fn error_from_message_maps_known_application_kinds() {
    assert_eq!(
        error_from_message("user has no views remaining").kind(),
        Some(AppErrorKind::NoViewsRemaining)
    );
    assert_eq!(
        error_from_message("roadmap not found").kind(),
        Some(AppErrorKind::RoadmapNotFound)
    );
    assert_eq!(
        error_from_message("User already exists").kind(),
        Some(AppErrorKind::UserExists)
    );
}

#[test]
fn error_from_message_keeps_unknown_messages_intact() {
    let err = error_from_message("quota exceeded for shard 7");
    assert_eq!(err.kind(), Some(AppErrorKind::Other));
    assert_eq!(err.to_string(), "quota exceeded for shard 7");
}

#[test]
fn unwrap_response_returns_data_payload() {
    let data = unwrap_response(r#"{"data":{"getAllTopics":[{"name":"rust"}]}}"#)
        .expect("data payload");
    assert_eq!(data["getAllTopics"][0]["name"], "rust");
}

#[test]
fn unwrap_response_prefers_errors_over_partial_data() {
    let err = unwrap_response(
        r#"{"data":null,"errors":[{"message":"roadmap not found"}]}"#,
    )
    .expect_err("error response");
    assert_eq!(err.kind(), Some(AppErrorKind::RoadmapNotFound));
}

#[test]
fn unwrap_response_rejects_non_graphql_bodies() {
    assert!(matches!(unwrap_response("<html>"), Err(ApiError::Decode(_))));
    assert!(matches!(unwrap_response("{}"), Err(ApiError::Decode(_))));
}

#[test]
fn decode_field_extracts_named_payload() {
    let data = serde_json::json!({"login": {"token": "abc"}});
    let payload: crate::net::types::AuthPayload =
        decode_field(data, "login").expect("login payload");
    assert_eq!(payload.token, "abc");
}

#[test]
fn decode_field_rejects_missing_or_null_fields() {
    let data = serde_json::json!({"login": null});
    let result: Result<crate::net::types::AuthPayload, _> = decode_field(data, "login");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}
