use super::*;

fn course(id: &str, title: &str) -> Course {
    Course { id: id.to_owned(), title: title.to_owned(), ..Course::default() }
}

fn page(courses: Vec<Course>, page_index: u32, cursor: Option<&str>) -> CoursePage {
    CoursePage {
        courses,
        pagination: Pagination {
            page: page_index,
            per_page: PAGE_SIZE,
            last_evaluated_key: cursor.map(str::to_owned),
        },
    }
}

#[test]
fn initial_request_has_no_cursor() {
    let state = CourseListState::default();
    let request = state.next_request();
    assert_eq!(request.page, 0);
    assert_eq!(request.last_evaluated_key, None);
}

#[test]
fn absorb_page_appends_and_carries_cursor_verbatim() {
    let mut state = CourseListState::default();
    state.absorb_page(page(vec![course("c-1", "One")], 0, Some("k@12")));

    assert_eq!(state.items.len(), 1);
    assert!(!state.exhausted);
    let request = state.next_request();
    assert_eq!(request.page, 1);
    assert_eq!(request.last_evaluated_key.as_deref(), Some("k@12"));
}

#[test]
fn absorb_final_page_marks_exhausted() {
    let mut state = CourseListState::default();
    state.absorb_page(page(vec![course("c-1", "One")], 0, Some("k@12")));
    state.absorb_page(page(vec![course("c-2", "Two")], 1, None));

    assert!(state.exhausted);
    assert_eq!(state.cursor, None);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn absorb_page_skips_already_known_ids() {
    let mut state = CourseListState::default();
    state.absorb_page(page(vec![course("c-1", "One")], 0, Some("k@12")));
    state.absorb_page(page(vec![course("c-1", "One"), course("c-2", "Two")], 1, None));

    let ids: Vec<&str> = state.items.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c-1", "c-2"]);
}

#[test]
fn filtered_matches_title_and_description_case_insensitively() {
    let mut state = CourseListState::default();
    let mut rust = course("c-1", "Intro to Rust");
    rust.description = "Ownership from zero".to_owned();
    let go = course("c-2", "Go Basics");
    state.absorb_page(page(vec![rust, go], 0, None));

    assert_eq!(state.filtered("RUST").len(), 1);
    assert_eq!(state.filtered("ownership").len(), 1);
    assert_eq!(state.filtered("").len(), 2);
    assert_eq!(state.filtered("python").len(), 0);
}
