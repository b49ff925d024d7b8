use super::*;
use crate::net::types::{LoginPayload, Service, User};
use serde_json::json;

// =============================================================================
// unwrap_list
// =============================================================================

#[test]
fn list_in_paged_envelope() {
    let body = json!({ "data": { "data": [{ "_id": "u1" }, { "_id": "u2" }], "total": 2 } });
    let users: Vec<User> = unwrap_list(body).unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].id, "u2");
}

#[test]
fn list_in_single_envelope() {
    let body = json!({ "status": "success", "data": [{ "_id": "s1", "name": { "en": "Plumbing" } }] });
    let services: Vec<Service> = unwrap_list(body).unwrap();
    assert_eq!(services[0].name.en, "Plumbing");
}

#[test]
fn bare_list() {
    let users: Vec<User> = unwrap_list(json!([{ "_id": "u1" }])).unwrap();
    assert_eq!(users.len(), 1);
}

#[test]
fn null_list_is_empty() {
    let users: Vec<User> = unwrap_list(json!({ "data": { "data": null } })).unwrap();
    assert!(users.is_empty());
}

#[test]
fn non_list_payload_is_an_error() {
    assert!(unwrap_list::<User>(json!({ "data": { "_id": "u1" } })).is_err());
}

// =============================================================================
// unwrap_item
// =============================================================================

#[test]
fn item_in_envelope() {
    let service: Service = unwrap_item(json!({ "data": { "_id": "s9", "name": "Tiling" } })).unwrap();
    assert_eq!(service.id, "s9");
}

#[test]
fn bare_item() {
    let service: Service = unwrap_item(json!({ "_id": "s9" })).unwrap();
    assert_eq!(service.id, "s9");
}

#[test]
fn login_payload_in_double_envelope() {
    let body = json!({ "data": { "data": { "token": "t", "user": { "_id": "a1", "role": "admin" } } } });
    let payload: LoginPayload = unwrap_item(body).unwrap();
    assert_eq!(payload.token, "t");
    assert_eq!(payload.user.id, "a1");
}

#[test]
fn item_with_data_list_is_not_descended() {
    // A record whose `data` is not an object stays as the payload.
    let value: serde_json::Value = unwrap_item(json!({ "data": [1, 2] })).unwrap();
    assert_eq!(value, json!({ "data": [1, 2] }));
}

// =============================================================================
// error_message
// =============================================================================

#[test]
fn error_message_prefers_top_level_message() {
    assert_eq!(error_message(&json!({ "message": " Email already exists " })), Some("Email already exists".into()));
}

#[test]
fn error_message_reads_error_and_nested_message() {
    assert_eq!(error_message(&json!({ "error": "Forbidden" })), Some("Forbidden".into()));
    assert_eq!(error_message(&json!({ "data": { "message": "Bad id" } })), Some("Bad id".into()));
}

#[test]
fn error_message_absent_or_blank() {
    assert_eq!(error_message(&json!({ "status": "fail" })), None);
    assert_eq!(error_message(&json!({ "message": "  " })), None);
    assert_eq!(error_message(&json!("oops")), None);
}
