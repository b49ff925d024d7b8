use super::*;
use serde_json::json;

fn from<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).expect("fixture")
}

fn sample_table(rows: usize) -> ExportTable {
    ExportTable {
        title: "Users".into(),
        file_stem: "users".into(),
        headers: vec!["Name".into(), "Email".into()],
        rows: (0..rows).map(|i| vec![format!("User {i}"), format!("u{i}@example.com")]).collect(),
    }
}

// =============================================================
// CSV
// =============================================================

#[test]
fn csv_starts_with_bom_and_header() {
    let bytes = sample_table(1).to_csv().expect("csv");
    assert!(bytes.starts_with(UTF8_BOM));
    let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).expect("utf8");
    assert_eq!(text, "Name,Email\nUser 0,u0@example.com\n");
}

#[test]
fn csv_quotes_commas_and_keeps_arabic() {
    let table = ExportTable {
        headers: vec!["الاسم".into(), "Address".into()],
        rows: vec![vec!["منى".into(), "12 Nile St, Cairo".into()]],
        ..ExportTable::default()
    };
    let bytes = table.to_csv().expect("csv");
    let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).expect("utf8");
    assert_eq!(text, "الاسم,Address\nمنى,\"12 Nile St, Cairo\"\n");
}

// =============================================================
// PDF
// =============================================================

#[test]
fn pdf_has_pdf_header() {
    let bytes = sample_table(3).to_pdf().expect("pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn pdf_paginates_long_tables() {
    let short = sample_table(1).to_pdf().expect("pdf");
    let long = sample_table(rows_per_page() * 3 + 1).to_pdf().expect("pdf");
    assert!(long.len() > short.len());
}

#[test]
fn pdf_of_empty_table_still_renders() {
    assert!(sample_table(0).to_pdf().is_ok());
}

// =============================================================
// Builders
// =============================================================

#[test]
fn users_table_has_one_row_per_user() {
    let users: Vec<User> = from(json!([
        { "_id": "u1", "fullName": "Mona", "email": "m@x.io", "role": "client", "isBanned": true,
          "rating": 4.5, "ratingCount": 2, "createdAt": "2025-01-02T00:00:00Z" },
        { "_id": "u2", "fullName": "Ali", "email": "a@x.io", "role": "admin" }
    ]));
    let table = users_table(&users, Language::En);
    assert_eq!(table.file_stem, "users");
    assert_eq!(table.headers.len(), 9);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][4], "Client");
    assert_eq!(table.rows[0][5], "Banned");
    assert_eq!(table.rows[0][6], "4.5");
    assert_eq!(table.rows[0][8], "2025-01-02");
    assert_eq!(table.rows[1][8], t(Language::En, "common.not_available"));
}

#[test]
fn craftsmen_table_uses_service_name_in_language() {
    let users: Vec<User> = from(json!([
        { "_id": "c1", "fullName": "Karim", "role": "craftsman",
          "craftsmanInfo": { "service": { "_id": "s1", "name": { "en": "Plumbing", "ar": "سباكة" } },
                             "verificationStatus": "verified" } }
    ]));
    let table = craftsmen_table(&users, Language::Ar);
    assert_eq!(table.rows[0][4], "سباكة");
    assert_eq!(table.rows[0][5], t(Language::Ar, "status.verified"));
}

#[test]
fn person_name_resolves_bare_ids_through_cache() {
    let users: Vec<User> = from(json!([{ "_id": "u9", "fullName": "Hana" }]));
    let bare = UserRef::Id("u9".into());
    assert_eq!(person_name(Some(&bare), &users).as_deref(), Some("Hana"));
    assert_eq!(person_name(Some(&UserRef::Id("nobody".into())), &users), None);
    assert_eq!(person_name(None, &users), None);
}

#[test]
fn compact_jobs_table_shortens_ids_and_titles() {
    let jobs: Vec<Job> = from(json!([
        { "_id": "64f1a2b3c4d5e6f708090a0b", "title": "Replace the kitchen sink drain pipe",
          "status": "Hired", "paymentType": "cash",
          "client": { "_id": "u1", "fullName": "Mona" } }
    ]));
    let compact = jobs_table(&jobs, &[], Language::En, true);
    assert_eq!(compact.headers.len(), 8);
    assert_eq!(compact.rows[0][0], "64f1a2b3...");
    assert_eq!(compact.rows[0][1], "Replace the kitchen ...");
    assert_eq!(compact.rows[0][5], "Mona");
    assert_eq!(compact.rows[0][6], t(Language::En, "requests.not_assigned"));

    let full = jobs_table(&jobs, &[], Language::En, false);
    assert_eq!(full.headers.len(), 11);
    assert_eq!(full.rows[0][0], "64f1a2b3c4d5e6f708090a0b");
    assert_eq!(full.rows[0][10], t(Language::En, "requests.not_scheduled"));
}

#[test]
fn download_is_noop_without_browser() {
    assert!(export_csv(&sample_table(2)).is_ok());
}
