use super::*;

fn topics(names: &[&str]) -> Vec<String> {
    names.iter().map(|&n| n.to_owned()).collect()
}

#[test]
fn add_topic_appends_trimmed_names() {
    let updated = add_topic(&topics(&["Rust"]), "  WASM  ");
    assert_eq!(updated, topics(&["Rust", "WASM"]));
}

#[test]
fn add_topic_skips_duplicates_case_insensitively() {
    let current = topics(&["Rust"]);
    assert_eq!(add_topic(&current, "rust"), current);
    assert_eq!(add_topic(&current, "RUST "), current);
}

#[test]
fn add_topic_ignores_empty_input() {
    let current = topics(&["Rust"]);
    assert_eq!(add_topic(&current, "   "), current);
}

#[test]
fn remove_topic_drops_only_the_exact_name() {
    let current = topics(&["Rust", "WASM", "Go"]);
    assert_eq!(remove_topic(&current, "WASM"), topics(&["Rust", "Go"]));
    assert_eq!(remove_topic(&current, "wasm"), current);
}
