use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_ISSUES_FOUND);
    assert_ne!(EXIT_SUCCESS, EXIT_ERROR);
    assert_ne!(EXIT_ISSUES_FOUND, EXIT_ERROR);
}
