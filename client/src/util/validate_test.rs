use super::*;

// =============================================================================
// is_valid_email
// =============================================================================

#[test]
fn email_accepts_common_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@mail.example.com"));
}

#[test]
fn email_rejects_malformed_values() {
    for bad in ["", "plain", "@b.com", "a@", "a@b", "a@.com", "a@b.", "a b@c.com", "a@@b.com", "a@b@c.com"] {
        assert!(!is_valid_email(bad), "accepted {bad:?}");
    }
}

// =============================================================================
// validate_image / validate_login
// =============================================================================

#[test]
fn image_must_be_image_and_small_enough() {
    assert_eq!(validate_image("image/png", 1024), Ok(()));
    assert_eq!(validate_image("image/jpeg", MAX_IMAGE_BYTES), Ok(()));
    assert_eq!(validate_image("application/pdf", 10), Err("validation.image_type"));
    assert_eq!(validate_image("image/png", MAX_IMAGE_BYTES + 1), Err("validation.image_size"));
}

#[test]
fn login_requires_both_fields() {
    assert_eq!(validate_login("a@b.com", "secret"), Ok(()));
    assert_eq!(validate_login("  ", "secret"), Err("login.fields_required"));
    assert_eq!(validate_login("a@b.com", ""), Err("login.fields_required"));
}

// =============================================================================
// AdminDraft
// =============================================================================

fn admin_draft() -> AdminDraft {
    AdminDraft {
        full_name: " Root Admin ".into(),
        email: "root@example.com".into(),
        phone: "  ".into(),
        password: "hunter22".into(),
        role: "admin".into(),
    }
}

#[test]
fn admin_draft_builds_trimmed_request() {
    let request = admin_draft().validate().unwrap();
    assert_eq!(request.full_name, "Root Admin");
    assert_eq!(request.phone, None);
    assert_eq!(request.role, "admin");
}

#[test]
fn admin_draft_keeps_phone_when_present() {
    let draft = AdminDraft { phone: " 0100 ".into(), ..admin_draft() };
    assert_eq!(draft.validate().unwrap().phone.as_deref(), Some("0100"));
}

#[test]
fn admin_draft_reports_every_failing_field() {
    let errors = AdminDraft::default().validate().unwrap_err();
    assert_eq!(errors.get("full_name"), Some(&"validation.full_name_required"));
    assert_eq!(errors.get("email"), Some(&"validation.email_required"));
    assert_eq!(errors.get("password"), Some(&"validation.password_required"));
    assert!(!errors.contains_key("role"));
}

#[test]
fn admin_draft_rejects_short_password_and_bad_email() {
    let draft = AdminDraft { email: "root@example".into(), password: "1234567".into(), ..admin_draft() };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("email"), Some(&"validation.email_invalid"));
    assert_eq!(errors.get("password"), Some(&"validation.password_short"));
}

#[test]
fn admin_draft_rejects_unknown_role() {
    let draft = AdminDraft { role: "craftsman".into(), ..admin_draft() };
    assert_eq!(draft.validate().unwrap_err().get("role"), Some(&"validation.role_invalid"));
}

// =============================================================================
// ServiceDraft
// =============================================================================

#[test]
fn service_needs_one_language_for_name_and_description() {
    let draft = ServiceDraft { name_ar: "سباكة".into(), description_en: "Pipes".into(), ..ServiceDraft::default() };
    assert_eq!(draft.validate(), Ok(()));

    let errors = ServiceDraft { name_en: "  ".into(), ..ServiceDraft::default() }.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("description"));
}

#[test]
fn service_draft_copies_existing_service() {
    let service = Service {
        id: "s1".into(),
        name: crate::net::types::LocalizedText { en: "Plumbing".into(), ar: "سباكة".into() },
        ..Service::default()
    };
    let draft = ServiceDraft::from_service(&service);
    assert_eq!(draft.name_en, "Plumbing");
    assert_eq!(draft.name_ar, "سباكة");
    assert!(draft.description_en.is_empty());
}

// =============================================================================
// ProfileDraft
// =============================================================================

#[test]
fn split_full_name_keeps_remaining_words_as_last_name() {
    assert_eq!(split_full_name("Sara Ali Hassan"), ("Sara".into(), "Ali Hassan".into()));
    assert_eq!(split_full_name(" Omar "), ("Omar".into(), String::new()));
    assert_eq!(split_full_name(""), (String::new(), String::new()));
}

#[test]
fn profile_draft_from_user() {
    let user = User {
        full_name: "Sara Ali".into(),
        email: "sara@example.com".into(),
        phone: Some("0100".into()),
        ..User::default()
    };
    let draft = ProfileDraft::from_user(&user);
    assert_eq!(draft.first_name, "Sara");
    assert_eq!(draft.last_name, "Ali");
    assert_eq!(draft.full_name(), "Sara Ali");
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn profile_draft_requires_names_and_email() {
    let errors = ProfileDraft { email: "nope".into(), ..ProfileDraft::default() }.validate().unwrap_err();
    assert_eq!(errors.get("first_name"), Some(&"validation.first_name_required"));
    assert_eq!(errors.get("last_name"), Some(&"validation.last_name_required"));
    assert_eq!(errors.get("email"), Some(&"validation.email_invalid"));
}
