use super::*;

// =============================================================
// welcome_text
// =============================================================

#[test]
fn welcome_prefers_name_over_email() {
    let user = FieldMap::new().with("email", "a@b.com").with("name", "Ada");
    assert_eq!(welcome_text(Some(&user)), "Welcome back, Ada");
}

#[test]
fn welcome_falls_back_to_email() {
    let user = FieldMap::new().with("name", "").with("email", "a@b.com");
    assert_eq!(welcome_text(Some(&user)), "Welcome back, a@b.com");
}

#[test]
fn welcome_without_identity() {
    assert_eq!(welcome_text(Some(&FieldMap::new().with("id", "1"))), "Welcome back");
    assert_eq!(welcome_text(None), "Welcome back");
}

// =============================================================
// display_value
// =============================================================

#[test]
fn humanize_key_replaces_underscores() {
    assert_eq!(humanize_key("created_at_utc"), "created at utc");
    assert_eq!(humanize_key("email"), "email");
}

#[test]
fn scalars_render_as_text() {
    assert_eq!(display_value(&FieldValue::from("pro")), "pro");
    assert_eq!(display_value(&FieldValue::from(30_i64)), "30");
    assert_eq!(display_value(&FieldValue::from(true)), "true");
}

#[test]
fn floats_render_without_trailing_zero_when_integral() {
    let whole: FieldValue = serde_json::from_str("3.0").unwrap();
    let frac: FieldValue = serde_json::from_str("2.5").unwrap();
    assert_eq!(display_value(&whole), "3");
    assert_eq!(display_value(&frac), "2.5");
}

#[test]
fn nested_values_render_as_compact_json() {
    let value: FieldValue = serde_json::from_str(r#"{"b":[1,null],"a":"x"}"#).unwrap();
    assert_eq!(display_value(&value), r#"{"b":[1,null],"a":"x"}"#);
    assert_eq!(display_value(&FieldValue::Null), "null");
}

#[test]
fn field_rows_keep_backend_order() {
    let map: FieldMap = serde_json::from_str(r#"{"zeta":1,"alpha_beta":"x"}"#).unwrap();
    assert_eq!(
        field_rows(&map),
        vec![("zeta".to_owned(), "1".to_owned()), ("alpha beta".to_owned(), "x".to_owned())]
    );
}
