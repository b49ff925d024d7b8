use super::*;
use serde_json::json;

fn from<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).expect("fixture")
}

fn services() -> Vec<Service> {
    from(json!([
        { "_id": "s1", "name": { "en": "Plumbing", "ar": "سباكة" } },
        { "_id": "s2", "name": { "en": "Painting", "ar": "دهان" } },
        { "_id": "s3", "name": { "en": "Carpentry" } }
    ]))
}

fn users() -> Vec<User> {
    from(json!([
        { "_id": "c1", "role": "craftsman", "rating": 4.0, "isBanned": true,
          "createdAt": "2025-01-05T10:00:00Z", "address": { "city": "Cairo" },
          "craftsmanInfo": { "service": "s1", "verificationStatus": "verified" } },
        { "_id": "c2", "role": "craftsman", "rating": 5.0,
          "createdAt": "2025-01-20T10:00:00Z", "address": { "city": "cairo " },
          "craftsmanInfo": { "service": { "_id": "s1", "name": { "en": "Plumbing", "ar": "سباكة" } },
                             "verificationStatus": "Verified" } },
        { "_id": "c3", "role": "craftsman",
          "createdAt": "2025-03-02T10:00:00Z", "address": { "city": "Giza" },
          "craftsmanInfo": { "service": "s2", "verificationStatus": "rejected" } },
        { "_id": "c4", "role": "craftsman", "rating": 3.5,
          "craftsmanInfo": { "service": "missing" } },
        { "_id": "u1", "role": "client", "rating": 1.0, "createdAt": "2025-03-09T10:00:00Z" }
    ]))
}

fn jobs() -> Vec<Job> {
    from(json!([
        { "_id": "j1", "status": "Posted", "createdAt": "2025-02-10T08:00:00Z", "service": "s1" },
        { "_id": "j2", "status": "Hired", "createdAt": "2025-02-11T08:00:00Z",
          "service": { "_id": "s2", "name": { "en": "Painting" } } },
        { "_id": "j3", "status": "On The Way", "createdAt": "2025-04-01T08:00:00Z", "service": "s1" },
        { "_id": "j4", "status": "Completed", "createdAt": "2025-04-01T18:00:00Z" },
        { "_id": "j5", "status": "Cancelled", "createdAt": "2025-01-01T00:00:00Z", "service": "gone" },
        { "_id": "j6", "status": "Disputed" }
    ]))
}

fn labels(points: &[ChartPoint]) -> Vec<&str> {
    points.iter().map(|p| p.label.as_str()).collect()
}

fn values(points: &[ChartPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

// =============================================================
// Stat cards
// =============================================================

#[test]
fn overview_stats_match_fixture() {
    let stats = overview_stats(&users(), &jobs(), "2025-04-01");
    assert_eq!(stats.users, 5);
    assert_eq!(stats.verified_craftsmen, 2);
    assert_eq!(stats.jobs, 6);
    assert_eq!(stats.jobs_today, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.ongoing, 3);
    assert_eq!(stats.cancelled, 1);
    assert!((stats.average_rating - 4.17).abs() < 1e-9);
}

#[test]
fn average_rating_ignores_clients_and_unrated() {
    let only_clients: Vec<User> = from(json!([{ "role": "client", "rating": 5.0 }]));
    assert!(average_rating(&only_clients).abs() < f64::EPSILON);
}

#[test]
fn job_stats_match_fixture() {
    let stats = job_stats(&jobs(), "2025-02-10");
    assert_eq!(
        stats,
        JobStats {
            total: 6,
            in_progress: 2,
            awaiting_offers: 1,
            completed: 1,
            cancelled: 1,
            disputed: 1,
            created_today: 1,
        }
    );
}

#[test]
fn unknown_today_counts_nothing() {
    assert_eq!(job_stats(&jobs(), "").created_today, 0);
}

#[test]
fn craftsman_stats_match_fixture() {
    assert_eq!(
        craftsman_stats(&users()),
        CraftsmanStats { total: 4, pending: 1, verified: 2, rejected: 1, banned: 1 }
    );
}

#[test]
fn craftsmen_per_service_id_counts_craftsmen_only() {
    let users = users();
    let counts = craftsmen_per_service_id(&users);
    assert_eq!(counts.get("s1"), Some(&2));
    assert_eq!(counts.get("s2"), Some(&1));
    assert_eq!(counts.get("missing"), Some(&1));
    assert_eq!(counts.len(), 3);
}

#[test]
fn service_stats_count_used_catalog_entries() {
    assert_eq!(service_stats(&services(), &users()), ServiceStats { total: 3, active: 2, unused: 1 });
}

// =============================================================
// Chart series
// =============================================================

#[test]
fn jobs_by_month_sorted_oldest_first() {
    let points = jobs_by_month(&jobs());
    assert_eq!(labels(&points), vec!["2025-01", "2025-02", "2025-04"]);
    assert_eq!(values(&points), vec![1.0, 2.0, 2.0]);
}

#[test]
fn user_growth_is_cumulative() {
    let points = user_growth(&users());
    assert_eq!(labels(&points), vec!["2025-01", "2025-03"]);
    assert_eq!(values(&points), vec![2.0, 4.0]);
}

#[test]
fn craftsmen_by_service_resolves_ids_through_catalog() {
    let points = craftsmen_by_service(&users(), &services(), Language::Ar, "?");
    assert_eq!(labels(&points), vec!["سباكة", "?", "دهان"]);
    assert_eq!(values(&points), vec![2.0, 1.0, 1.0]);
}

#[test]
fn top_cities_fold_case_and_use_unknown_label() {
    let points = top_cities(&users(), "unknown");
    assert_eq!(labels(&points), vec!["cairo", "giza", "unknown"]);
    assert_eq!(values(&points), vec![2.0, 1.0, 1.0]);
}

#[test]
fn top_cities_are_capped() {
    let many: Vec<User> = (0..12)
        .map(|i| from(json!({ "role": "craftsman", "address": { "city": format!("city{i:02}") } })))
        .collect();
    assert_eq!(top_cities(&many, "unknown").len(), TOP_CITIES);
}

#[test]
fn verification_distribution_in_review_order() {
    let dist = verification_distribution(&users());
    assert_eq!(
        dist,
        vec![
            (VerificationStatus::Pending, 1),
            (VerificationStatus::Verified, 2),
            (VerificationStatus::Rejected, 1),
        ]
    );
}

#[test]
fn ratings_by_service_average_two_decimals() {
    let points = ratings_by_service(&users(), &services(), Language::En);
    assert_eq!(labels(&points), vec!["Painting", "Plumbing"]);
    assert_eq!(values(&points), vec![0.0, 4.5]);
}

#[test]
fn service_usage_shares_sum_over_craftsmen() {
    let usage = service_usage(&services(), &users(), Language::En);
    assert_eq!(usage.len(), 2);
    assert_eq!(usage[0].name, "Plumbing");
    assert_eq!(usage[0].craftsmen, 2);
    assert!((usage[0].percent - 50.0).abs() < 1e-9);
    assert_eq!(usage[1].name, "Painting");
    assert!((usage[1].percent - 25.0).abs() < 1e-9);
}

#[test]
fn jobs_per_service_skips_unresolvable() {
    let points = jobs_per_service(&jobs(), &services(), Language::En);
    assert_eq!(labels(&points), vec!["Plumbing", "Painting"]);
    assert_eq!(values(&points), vec![2.0, 1.0]);
}

fn twin_services() -> Vec<Service> {
    from(json!([
        { "_id": "s1", "name": { "en": "Cleaning" } },
        { "_id": "s2", "name": { "en": "Cleaning" } }
    ]))
}

#[test]
fn same_named_services_stay_separate_buckets() {
    let craftsmen: Vec<User> = from(json!([
        { "_id": "c1", "role": "craftsman", "rating": 4.0, "craftsmanInfo": { "service": "s1" } },
        { "_id": "c2", "role": "craftsman", "rating": 2.0, "craftsmanInfo": { "service": "s2" } },
        { "_id": "c3", "role": "craftsman", "craftsmanInfo": { "service": "s2" } }
    ]));
    let by_service = craftsmen_by_service(&craftsmen, &twin_services(), Language::En, "?");
    assert_eq!(labels(&by_service), vec!["Cleaning", "Cleaning"]);
    assert_eq!(values(&by_service), vec![2.0, 1.0]);

    let mut ratings = values(&ratings_by_service(&craftsmen, &twin_services(), Language::En));
    ratings.sort_by(f64::total_cmp);
    assert_eq!(ratings, vec![2.0, 4.0]);
}

#[test]
fn jobs_for_same_named_services_are_not_merged() {
    let list: Vec<Job> = from(json!([
        { "_id": "j1", "service": "s1" },
        { "_id": "j2", "service": "s2" },
        { "_id": "j3", "service": "s2" }
    ]));
    let points = jobs_per_service(&list, &twin_services(), Language::En);
    assert_eq!(values(&points), vec![2.0, 1.0]);
}
