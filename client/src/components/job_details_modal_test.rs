use super::*;

fn job(value: serde_json::Value) -> Job {
    serde_json::from_value(value).expect("fixture")
}

#[test]
fn embed_url_spans_bbox_around_point() {
    let url = osm_embed_url(30.0, 31.0);
    assert!(url.starts_with("https://www.openstreetmap.org/export/embed.html?bbox="));
    let bbox: Vec<f64> = url
        .split("bbox=")
        .nth(1)
        .and_then(|rest| rest.split('&').next())
        .expect("bbox")
        .split(',')
        .map(|v| v.parse().expect("number"))
        .collect();
    let expected = [30.99, 29.99, 31.01, 30.01];
    assert!(bbox.iter().zip(expected).all(|(a, b)| (a - b).abs() < 1e-9));
    assert!(url.ends_with("&marker=30,31"));
}

#[test]
fn map_link_carries_marker() {
    assert_eq!(osm_link(30.5, 31.25), "https://www.openstreetmap.org/?mlat=30.5&mlon=31.25#map=16/30.5/31.25");
}

#[test]
fn timeline_skips_missing_dates() {
    let j = job(serde_json::json!({
        "_id": "j1",
        "createdAt": "2025-02-01T08:30:00Z",
        "jobDate": null
    }));
    let entries = timeline(&j, Language::En);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "common.created_at");
}

#[test]
fn timeline_orders_created_scheduled_updated() {
    let j = job(serde_json::json!({
        "_id": "j1",
        "createdAt": "2025-02-01T08:30:00Z",
        "jobDate": "2025-02-03T00:00:00Z",
        "updatedAt": "2025-02-04T10:00:00Z"
    }));
    let keys: Vec<_> = timeline(&j, Language::En).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["common.created_at", "requests.job_date", "common.updated_at"]);
}

#[test]
fn quote_tone_by_status() {
    assert_eq!(quote_tone(&QuoteStatus::Accepted), "badge--success");
    assert_eq!(quote_tone(&QuoteStatus::Declined), "badge--danger");
    assert_eq!(quote_tone(&QuoteStatus::Submitted), "badge--info");
}
