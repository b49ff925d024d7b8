use super::*;
use serde_json::json;

// =============================================================================
// Paths
// =============================================================================

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(endpoint("/services"), "/api/services");
}

#[test]
fn list_paths_request_everything_at_once() {
    assert_eq!(users_list_path(), "/admin/users?page=1&limit=1000");
    assert_eq!(jobs_list_path(), "/jobs?page=1&limit=1000");
}

#[test]
fn ban_and_unban_paths_and_bodies() {
    assert_eq!(ban_path("u1", true), "/admin/users/u1/ban");
    assert_eq!(ban_path("u1", false), "/admin/users/u1/unban");
    assert_eq!(ban_body("u1", true), json!({ "user_id": "u1" }));
    assert_eq!(ban_body("u1", false), json!({}));
}

#[test]
fn verification_paths() {
    assert_eq!(verification_path("c7", VerificationAction::Approve), "/admin/verifications/c7/approve");
    assert_eq!(verification_path("c7", VerificationAction::Reject), "/admin/verifications/c7/reject");
}

#[test]
fn job_and_service_paths() {
    assert_eq!(job_path("j1"), "/jobs/j1");
    assert_eq!(job_quotes_path("j1"), "/jobs/j1/quotes");
    assert_eq!(service_path(None), "/services");
    assert_eq!(service_path(Some("s1")), "/services/s1");
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

// =============================================================================
// Multipart fields
// =============================================================================

#[test]
fn service_fields_are_trimmed_and_complete() {
    let draft = ServiceDraft {
        name_en: " Plumbing ".into(),
        name_ar: String::new(),
        description_en: "Pipes".into(),
        description_ar: "مواسير".into(),
    };
    assert_eq!(
        service_form_fields(&draft),
        vec![
            ("nameEn", "Plumbing".to_owned()),
            ("nameAr", String::new()),
            ("descriptionEn", "Pipes".to_owned()),
            ("descriptionAr", "مواسير".to_owned()),
        ]
    );
}

#[test]
fn profile_fields_join_first_and_last_name() {
    let draft = ProfileDraft {
        first_name: " Sara ".into(),
        last_name: "Ali".into(),
        email: "sara@example.com ".into(),
        phone: String::new(),
    };
    assert_eq!(
        profile_form_fields(&draft),
        vec![("fullName", "Sara Ali".to_owned()), ("email", "sara@example.com".to_owned())]
    );
}

#[test]
fn profile_fields_send_phone_only_when_set() {
    let mut draft = ProfileDraft {
        first_name: "Sara".into(),
        last_name: "Ali".into(),
        email: "sara@example.com".into(),
        phone: "   ".into(),
    };
    assert!(profile_form_fields(&draft).iter().all(|(name, _)| *name != "phone"));
    draft.phone = " 0100 ".into();
    assert_eq!(profile_form_fields(&draft).last(), Some(&("phone", "0100".to_owned())));
}

// =============================================================================
// ApiError
// =============================================================================

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 409, message: Some("Email already exists".into()) };
    assert_eq!(err.user_message("fallback"), "Email already exists");
}

#[test]
fn user_message_uses_fallback_otherwise() {
    assert_eq!(ApiError::Status { status: 500, message: None }.user_message("Try again"), "Try again");
    assert_eq!(ApiError::Network("offline".into()).user_message("Try again"), "Try again");
}

#[test]
fn not_admin_is_translated() {
    assert_eq!(ApiError::NotAdmin.localized_message(Language::En, "login.failed"), "You are not authorized as admin.");
    assert_eq!(
        ApiError::NotAdmin.localized_message(Language::Ar, "login.failed"),
        i18n::t(Language::Ar, "login.not_admin")
    );
    assert_ne!(ApiError::NotAdmin.localized_message(Language::Ar, "login.failed"), "You are not authorized as admin.");
}

#[test]
fn localized_message_keeps_server_text_and_translates_fallback() {
    let err = ApiError::Status { status: 401, message: Some("Invalid credentials".into()) };
    assert_eq!(err.localized_message(Language::Ar, "login.failed"), "Invalid credentials");
    let bare = ApiError::Network("offline".into());
    assert_eq!(bare.localized_message(Language::Ar, "login.failed"), i18n::t(Language::Ar, "login.failed"));
}

#[test]
fn create_admin_request_omits_missing_phone() {
    let request = CreateAdminRequest {
        full_name: "Root".into(),
        email: "root@example.com".into(),
        password: "longenough".into(),
        phone: None,
        role: "admin".into(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "fullName": "Root", "email": "root@example.com", "password": "longenough", "role": "admin" })
    );
}

