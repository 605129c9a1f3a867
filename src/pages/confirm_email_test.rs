use super::*;

#[test]
fn validate_code_trims_surrounding_whitespace() {
    assert_eq!(validate_code("  123456  "), Ok("123456".to_owned()));
}

#[test]
fn validate_code_rejects_empty_input() {
    assert!(validate_code("").is_err());
    assert!(validate_code("   ").is_err());
}
