use super::*;

fn filled_form() -> CourseForm {
    CourseForm {
        title: " Practical Rust ".to_owned(),
        url: " https://example.com/rust ".to_owned(),
        source: "YouTube".to_owned(),
        description: " Hands-on ownership ".to_owned(),
        topics: "Rust, Systems".to_owned(),
        difficulty: "Intermediate".to_owned(),
        duration: " 12 ".to_owned(),
        language: "EN".to_owned(),
        is_free: true,
    }
}

#[test]
fn build_course_input_trims_and_parses_the_form() {
    let course = build_course_input(&filled_form(), "c-1".to_owned(), "ada").expect("valid form");
    assert_eq!(course.title, "Practical Rust");
    assert_eq!(course.url, "https://example.com/rust");
    assert_eq!(course.duration, 12);
    assert_eq!(course.topics, vec!["Rust", "Systems"]);
    assert_eq!(course.author, "ada");
    assert!(course.is_free);
}

#[test]
fn build_course_input_requires_title_and_url() {
    let mut form = filled_form();
    form.title = "  ".to_owned();
    assert!(build_course_input(&form, "c-1".to_owned(), "ada").is_err());

    let mut form = filled_form();
    form.url = String::new();
    assert!(build_course_input(&form, "c-1".to_owned(), "ada").is_err());
}

#[test]
fn build_course_input_requires_a_difficulty_choice() {
    let mut form = filled_form();
    form.difficulty = String::new();
    assert!(build_course_input(&form, "c-1".to_owned(), "ada").is_err());
}

#[test]
fn build_course_input_rejects_non_numeric_or_zero_durations() {
    let mut form = filled_form();
    form.duration = "a lot".to_owned();
    assert!(build_course_input(&form, "c-1".to_owned(), "ada").is_err());

    let mut form = filled_form();
    form.duration = "0".to_owned();
    assert!(build_course_input(&form, "c-1".to_owned(), "ada").is_err());
}
