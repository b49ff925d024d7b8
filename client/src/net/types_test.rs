use super::*;
use serde_json::json;

// =============================================================================
// Enumerated fields
// =============================================================================

#[test]
fn role_parses_known_values_case_insensitively() {
    assert_eq!(Role::from("Admin".to_owned()), Role::Admin);
    assert_eq!(Role::from("craftsman".to_owned()), Role::Craftsman);
    assert_eq!(Role::from("support".to_owned()), Role::Other("support".into()));
    assert_eq!(Role::Other("support".into()).as_str(), "support");
}

#[test]
fn verification_status_blank_is_pending() {
    assert_eq!(VerificationStatus::from(String::new()), VerificationStatus::Pending);
    assert_eq!(VerificationStatus::from("VERIFIED".to_owned()), VerificationStatus::Verified);
}

#[test]
fn job_status_round_trips_on_the_way() {
    let status: JobStatus = serde_json::from_value(json!("On The Way")).unwrap();
    assert_eq!(status, JobStatus::OnTheWay);
    assert_eq!(serde_json::to_value(&status).unwrap(), json!("On The Way"));
}

#[test]
fn job_status_groups() {
    assert!(JobStatus::Hired.is_in_progress());
    assert!(JobStatus::OnTheWay.is_in_progress());
    assert!(!JobStatus::Posted.is_in_progress());
    assert!(JobStatus::Quoted.is_ongoing());
    assert!(!JobStatus::Completed.is_ongoing());
    assert!(!JobStatus::Cancelled.is_ongoing());
}

// =============================================================================
// LocalizedText
// =============================================================================

#[test]
fn localized_text_accepts_pair_and_plain() {
    let pair: LocalizedText = serde_json::from_value(json!({ "en": "Plumbing", "ar": "سباكة" })).unwrap();
    assert_eq!(pair.en, "Plumbing");
    assert_eq!(pair.ar, "سباكة");

    let plain: LocalizedText = serde_json::from_value(json!("Painting")).unwrap();
    assert_eq!(plain.en, "Painting");
    assert!(plain.ar.is_empty());
}

#[test]
fn localized_pick_falls_back_en_then_ar() {
    let both = LocalizedText { en: "Plumbing".into(), ar: "سباكة".into() };
    assert_eq!(both.pick(Language::Ar), "سباكة");
    assert_eq!(both.pick(Language::En), "Plumbing");

    let en_only = LocalizedText { en: "Plumbing".into(), ar: String::new() };
    assert_eq!(en_only.pick(Language::Ar), "Plumbing");

    let ar_only = LocalizedText { en: "  ".into(), ar: "سباكة".into() };
    assert_eq!(ar_only.pick(Language::En), "سباكة");

    assert_eq!(LocalizedText::default().pick(Language::En), "");
    assert!(LocalizedText::default().is_blank());
}

// =============================================================================
// User
// =============================================================================

#[test]
fn user_tolerates_nulls_and_missing_fields() {
    let user: User = serde_json::from_value(json!({
        "_id": "u1",
        "fullName": null,
        "email": "a@b.com",
        "role": "craftsman",
        "isBanned": null,
        "craftsmanInfo": { "verificationStatus": null, "skills": null }
    }))
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.display_name(), "a@b.com");
    assert!(!user.is_banned);
    assert!(user.is_craftsman());
    assert_eq!(user.verification_status(), VerificationStatus::Pending);
}

#[test]
fn user_reads_nested_records() {
    let user: User = serde_json::from_value(json!({
        "_id": "u2",
        "fullName": "Sara Ali",
        "phone": "0100",
        "isBanned": true,
        "isBanned_reason": "spam",
        "address": { "street": "1 Nile St", "city": "Cairo", "country": "Egypt" },
        "wallet": { "balance": 120.5, "withdrawableBalance": 100 },
        "userLogs": { "lastLogin": "2024-05-01T10:00:00Z", "lastIP": "10.0.0.1" },
        "craftsmanInfo": {
            "service": { "_id": "s1", "name": { "en": "Plumbing", "ar": "سباكة" } },
            "verificationStatus": "Verified",
            "verificationDocs": [{ "docUrl": "https://x/doc.png", "docName": "ID", "docType": "id_card" }]
        }
    }))
    .unwrap();
    assert_eq!(user.city(), "Cairo");
    assert_eq!(user.country(), "Egypt");
    assert_eq!(user.is_banned_reason.as_deref(), Some("spam"));
    assert_eq!(user.wallet.as_ref().map(|w| w.withdrawable_balance), Some(100.0));
    assert_eq!(user.user_logs.as_ref().and_then(|l| l.last_ip.as_deref()), Some("10.0.0.1"));
    assert_eq!(user.verification_status(), VerificationStatus::Verified);
    assert_eq!(user.service_id(), Some("s1"));
    let info = user.craftsman_info.as_ref().unwrap();
    assert_eq!(info.service.as_ref().and_then(|s| s.name(Language::Ar)), Some("سباكة"));
    assert_eq!(info.verification_docs[0].doc_type, "id_card");
}

#[test]
fn avatar_falls_back_to_generated_initials() {
    let mut user = User { full_name: "Sara Ali".into(), ..User::default() };
    assert_eq!(user.avatar_url(), "https://ui-avatars.com/api/?name=Sara+Ali&background=random");
    user.profile_picture = Some("https://cdn/p.png".into());
    assert_eq!(user.avatar_url(), "https://cdn/p.png");
}

// =============================================================================
// Jobs
// =============================================================================

#[test]
fn job_people_may_be_ids_or_documents() {
    let job: Job = serde_json::from_value(json!({
        "_id": "j1",
        "title": "Fix sink",
        "status": "Hired",
        "paymentType": "Visa",
        "client": "u1",
        "craftsman": { "_id": "u2", "fullName": "Omar" },
        "service": "s1",
        "location": { "type": "Point", "coordinates": [31.2357, 30.0444] }
    }))
    .unwrap();
    assert_eq!(job.client.as_ref().map(UserRef::id), Some("u1"));
    assert!(job.client.as_ref().unwrap().populated().is_none());
    assert_eq!(job.craftsman.as_ref().and_then(UserRef::populated).map(|u| u.full_name.as_str()), Some("Omar"));
    assert_eq!(job.payment_type, Some(PaymentType::Visa));
    assert_eq!(job.service_id(), Some("s1"));
    assert_eq!(job.location.as_ref().and_then(GeoPoint::lat_lng), Some((30.0444, 31.2357)));
}

#[test]
fn geo_point_needs_two_coordinates() {
    assert_eq!(GeoPoint { coordinates: vec![31.0] }.lat_lng(), None);
}

#[test]
fn address_short_line_skips_blank_parts() {
    let address = Address { street: "1 Nile St".into(), city: "Cairo".into(), ..Address::default() };
    assert_eq!(address.short_line(), "1 Nile St, Cairo");
}

#[test]
fn quote_parses_price_and_status() {
    let quote: Quote = serde_json::from_value(json!({
        "_id": "q1",
        "price": 250,
        "status": "Accepted",
        "craftsman": "u2"
    }))
    .unwrap();
    assert!((quote.price - 250.0).abs() < f64::EPSILON);
    assert_eq!(quote.status, QuoteStatus::Accepted);
}

#[test]
fn service_accepts_legacy_icon_field() {
    let service: Service = serde_json::from_value(json!({
        "_id": "s1",
        "name": { "en": "Plumbing" },
        "icon": "https://cdn/plumbing.png"
    }))
    .unwrap();
    assert_eq!(service.image.as_deref(), Some("https://cdn/plumbing.png"));
    assert_eq!(service.description, LocalizedText::default());
}
