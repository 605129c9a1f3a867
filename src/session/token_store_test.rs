use super::*;

#[test]
fn read_returns_none_when_nothing_stored() {
    clear();
    assert_eq!(read(), None);
}

#[test]
fn save_then_read_round_trips() {
    save("abc.def.ghi");
    assert_eq!(read(), Some("abc.def.ghi".to_owned()));
    clear();
}

#[test]
fn save_replaces_previous_token() {
    save("first");
    save("second");
    assert_eq!(read(), Some("second".to_owned()));
    clear();
}

#[test]
fn clear_is_idempotent() {
    save("token");
    clear();
    clear();
    assert_eq!(read(), None);
}

#[test]
fn empty_string_counts_as_absent() {
    save("");
    assert_eq!(read(), None);
    clear();
}
