use super::*;

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Sign In");
    assert_eq!(submit_label(true), "Signing in...");
}
