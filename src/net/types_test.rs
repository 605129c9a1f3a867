use super::*;

#[test]
fn course_deserializes_camel_case_wire_fields() {
    let course: Course = serde_json::from_str(
        r#"{
            "id": "c-1",
            "title": "Intro to Rust",
            "description": "Ownership from zero",
            "url": "https://example.com/rust",
            "source": "YouTube",
            "difficulty": "Beginner",
            "topics": ["Rust"],
            "isFree": true,
            "author": "ada",
            "duration": 8,
            "language": "EN"
        }"#,
    )
    .expect("course payload");
    assert!(course.is_free);
    assert_eq!(course.duration, 8);
}

#[test]
fn course_tolerates_sparse_payloads() {
    let course: Course =
        serde_json::from_str(r#"{"id":"c-2","title":"Bare"}"#).expect("sparse course");
    assert_eq!(course.topics, Vec::<String>::new());
    assert!(!course.is_free);
}

#[test]
fn roadmap_keeps_course_id_ordering() {
    let roadmap: Roadmap = serde_json::from_str(
        r#"{"id":"r-1","title":"Path","courseIDs":["c-3","c-1","c-2"]}"#,
    )
    .expect("roadmap payload");
    assert_eq!(roadmap.course_ids, vec!["c-3", "c-1", "c-2"]);
}

#[test]
fn pagination_cursor_is_omitted_when_absent() {
    let first_page = Pagination { page: 0, per_page: 10, last_evaluated_key: None };
    let wire = serde_json::to_string(&first_page).expect("serialize");
    assert!(!wire.contains("lastEvaluatedKey"));
}

#[test]
fn pagination_cursor_round_trips_verbatim() {
    let cursor = Pagination {
        page: 2,
        per_page: 10,
        last_evaluated_key: Some("eyJpZCI6ImMtMjAifQ==".to_owned()),
    };
    let wire = serde_json::to_string(&cursor).expect("serialize");
    let back: Pagination = serde_json::from_str(&wire).expect("deserialize");
    assert_eq!(back, cursor);
}

#[test]
fn roadmap_input_serializes_course_ids_in_order() {
    let input = RoadmapInput {
        id: "r-9".to_owned(),
        title: "Path".to_owned(),
        course_ids: vec!["c-2".to_owned(), "c-1".to_owned()],
        ..RoadmapInput::default()
    };
    let wire = serde_json::to_value(&input).expect("serialize");
    assert_eq!(wire["courseIDs"][0], "c-2");
    assert_eq!(wire["courseIDs"][1], "c-1");
    assert_eq!(wire["isCustom"], false);
}

#[test]
fn challenge_outcome_defaults_missing_counters() {
    let outcome: ChallengeOutcome =
        serde_json::from_str(r#"{"rating":7,"insight":"solid"}"#).expect("outcome");
    assert_eq!(outcome.left, 0);
}
