use super::*;
use crate::net::types::FieldMap;

#[test]
fn refresh_label_reflects_loading() {
    assert_eq!(refresh_label(false), "Refresh");
    assert_eq!(refresh_label(true), "Loading...");
}

#[test]
fn empty_details_hint_names_backend() {
    let hint = empty_details_hint("http://localhost:3000");
    assert!(hint.starts_with("No data available."));
    assert!(hint.contains("http://localhost:3000"));
}

#[test]
fn details_body_shows_loading_while_fetching() {
    let state = DetailsState { details: Some(FieldMap::new().with("plan", "pro")), loading: true };
    assert_eq!(details_body(&state), DetailsBody::Loading);
}

#[test]
fn details_body_shows_fields_once_loaded() {
    let state = DetailsState { details: Some(FieldMap::new().with("plan", "pro")), loading: false };
    assert_eq!(details_body(&state), DetailsBody::Fields);
}

#[test]
fn details_body_shows_hint_without_data() {
    assert_eq!(details_body(&DetailsState::default()), DetailsBody::Empty);
    let empty = DetailsState { details: Some(FieldMap::new()), loading: false };
    assert_eq!(details_body(&empty), DetailsBody::Empty);
}
