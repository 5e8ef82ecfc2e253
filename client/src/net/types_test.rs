use serde_json::json;

use super::*;

#[test]
fn user_deserializes_with_missing_optional_fields() {
    let user: User = serde_json::from_value(json!({ "id": "u1" })).unwrap();
    assert_eq!(user.id, "u1");
    assert!(user.username.is_empty());
    assert!(user.email.is_none());
}

#[test]
fn display_name_prefers_username() {
    let user: User = serde_json::from_value(json!({ "id": "u1", "username": "cosmaker" })).unwrap();
    assert_eq!(user.display_name(), "cosmaker");
}

#[test]
fn display_name_falls_back_to_id() {
    let user: User = serde_json::from_value(json!({ "id": "u1", "username": "  " })).unwrap();
    assert_eq!(user.display_name(), "u1");
}

#[test]
fn current_user_envelope_accepts_null_user() {
    let envelope: CurrentUserEnvelope = serde_json::from_value(json!({ "user": null })).unwrap();
    assert!(envelope.user.is_none());
}

#[test]
fn error_envelope_reads_refresh_flag() {
    let envelope: ErrorEnvelope =
        serde_json::from_value(json!({ "error": "Token expired", "needsRefresh": true })).unwrap();
    assert!(envelope.needs_refresh);

    let plain: ErrorEnvelope = serde_json::from_value(json!({ "error": "Not authenticated" })).unwrap();
    assert!(!plain.needs_refresh);
}

#[test]
fn list_items_accepts_bare_array() {
    let projects: Vec<Project> = list_items(json!([{ "slug": "armor", "name": "Armor" }])).unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].slug, "armor");
}

#[test]
fn list_items_accepts_paginated_results() {
    let body = json!({ "count": 1, "next": null, "results": [{ "slug": "wig", "name": "Wig" }] });
    let projects: Vec<Project> = list_items(body).unwrap();
    assert_eq!(projects[0].name, "Wig");
}

#[test]
fn list_items_rejects_mismatched_items() {
    assert!(list_items::<Project>(json!([{ "title": "no slug" }])).is_err());
}

#[test]
fn total_hours_sums_entries() {
    let entries: Vec<TimeEntry> =
        list_items(json!([{ "hours": 1.5, "description": "sewing" }, { "hours": 2.0 }])).unwrap();
    assert!((total_hours(&entries) - 3.5).abs() < f64::EPSILON);
    assert!(total_hours(&[]).abs() < f64::EPSILON);
}
