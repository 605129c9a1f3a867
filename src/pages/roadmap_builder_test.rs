use super::*;

fn course(id: &str) -> Course {
    Course { id: id.to_owned(), ..Course::default() }
}

fn filled_form() -> BuilderForm {
    BuilderForm {
        title: "  Systems Programming  ".to_owned(),
        description: " From C to Rust ".to_owned(),
        difficulty: "Intermediate".to_owned(),
        topics: "Rust, C, Operating Systems".to_owned(),
        image_url: Some("https://img.example/1.png".to_owned()),
    }
}

#[test]
fn build_roadmap_input_preserves_sequence_order() {
    let sequence = vec![course("c-3"), course("c-1"), course("c-2")];
    let input = build_roadmap_input("r-1".to_owned(), &filled_form(), &sequence, "ada");
    assert_eq!(input.course_ids, vec!["c-3", "c-1", "c-2"]);
}

#[test]
fn build_roadmap_input_trims_and_parses_fields() {
    let input = build_roadmap_input("r-1".to_owned(), &filled_form(), &[course("c-1")], "ada");
    assert_eq!(input.title, "Systems Programming");
    assert_eq!(input.description, "From C to Rust");
    assert_eq!(input.topics, vec!["Rust", "C", "Operating Systems"]);
    assert_eq!(input.author, "ada");
    assert_eq!(input.created_by, "ada");
    assert!(input.is_custom);
    assert_eq!(input.likes, 0);
    assert_eq!(input.image_url, "https://img.example/1.png");
}

#[test]
fn build_roadmap_input_without_thumbnail_sends_empty_url() {
    let form = BuilderForm { image_url: None, ..filled_form() };
    let input = build_roadmap_input("r-1".to_owned(), &form, &[course("c-1")], "ada");
    assert_eq!(input.image_url, "");
}

#[test]
fn validate_builder_requires_title_and_courses() {
    let form = filled_form();
    assert_eq!(validate_builder(&form, &[course("c-1")]), Ok(()));
    assert!(validate_builder(&form, &[]).is_err());

    let untitled = BuilderForm { title: "   ".to_owned(), ..filled_form() };
    assert!(validate_builder(&untitled, &[course("c-1")]).is_err());
}

#[test]
fn apply_generated_fills_the_form_and_returns_the_sequence() {
    let generated = Roadmap {
        title: "Web Basics".to_owned(),
        description: "HTML to deployment".to_owned(),
        difficulty: "Beginner".to_owned(),
        topics: vec!["HTML".to_owned(), "CSS".to_owned()],
        courses: vec![course("c-9"), course("c-4")],
        ..Roadmap::default()
    };

    let mut form = BuilderForm::default();
    let sequence = apply_generated(&mut form, &generated);

    assert_eq!(form.title, "Web Basics");
    assert_eq!(form.topics, "HTML, CSS");
    assert_eq!(sequence.len(), 2);
    assert_eq!(sequence[0].id, "c-9");
}
