//! Stat-card counts and chart series derived from loaded collections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overview, craftsmen, jobs and services pages all summarize the same
//! in-memory lists. Everything here is a pure reduction so the numbers can be
//! checked against hand-computed fixtures.
//!
//! Services are keyed by id and named through the services list, so a
//! craftsman whose service arrives as a bare id still lands in the right
//! bucket.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::collections::{BTreeMap, HashMap};

use crate::net::types::{JobStatus, Job, Service, ServiceRef, User, VerificationStatus};
use crate::util::format::{local_day_key, month_key, round_to};
use crate::util::i18n::Language;

/// Maximum number of bars in the top-cities chart.
pub const TOP_CITIES: usize = 8;

/// One labelled value of a chart series.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    fn count(label: impl Into<String>, value: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let value = value as f64;
        Self { label: label.into(), value }
    }
}

// =============================================================================
// STAT CARDS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverviewStats {
    pub users: usize,
    pub verified_craftsmen: usize,
    pub jobs: usize,
    pub jobs_today: usize,
    pub completed: usize,
    pub ongoing: usize,
    pub cancelled: usize,
    pub average_rating: f64,
}

pub fn overview_stats(users: &[User], jobs: &[Job], today: &str) -> OverviewStats {
    OverviewStats {
        users: users.len(),
        verified_craftsmen: users
            .iter()
            .filter(|u| u.is_craftsman() && u.verification_status() == VerificationStatus::Verified)
            .count(),
        jobs: jobs.len(),
        jobs_today: created_on(jobs, today),
        completed: count_status(jobs, &JobStatus::Completed),
        ongoing: jobs.iter().filter(|j| j.status.is_ongoing()).count(),
        cancelled: count_status(jobs, &JobStatus::Cancelled),
        average_rating: average_rating(users),
    }
}

/// Mean rating of rated craftsmen, two decimals; zero when nobody is rated.
pub fn average_rating(users: &[User]) -> f64 {
    let ratings: Vec<f64> = users
        .iter()
        .filter(|u| u.is_craftsman())
        .filter_map(|u| u.rating)
        .filter(|r| *r > 0.0)
        .collect();
    if ratings.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    round_to(mean, 2)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobStats {
    pub total: usize,
    pub in_progress: usize,
    pub awaiting_offers: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub disputed: usize,
    pub created_today: usize,
}

pub fn job_stats(jobs: &[Job], today: &str) -> JobStats {
    JobStats {
        total: jobs.len(),
        in_progress: jobs.iter().filter(|j| j.status.is_in_progress()).count(),
        awaiting_offers: count_status(jobs, &JobStatus::Posted),
        completed: count_status(jobs, &JobStatus::Completed),
        cancelled: count_status(jobs, &JobStatus::Cancelled),
        disputed: count_status(jobs, &JobStatus::Disputed),
        created_today: created_on(jobs, today),
    }
}

fn count_status(jobs: &[Job], status: &JobStatus) -> usize {
    jobs.iter().filter(|j| &j.status == status).count()
}

/// Jobs whose `createdAt` falls on local day `today` (`YYYY-MM-DD`).
fn created_on(jobs: &[Job], today: &str) -> usize {
    if today.is_empty() {
        return 0;
    }
    jobs.iter()
        .filter_map(|j| j.created_at.as_deref())
        .filter_map(local_day_key)
        .filter(|day| day == today)
        .count()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CraftsmanStats {
    pub total: usize,
    pub pending: usize,
    pub verified: usize,
    pub rejected: usize,
    pub banned: usize,
}

pub fn craftsman_stats(users: &[User]) -> CraftsmanStats {
    let mut stats = CraftsmanStats::default();
    for user in users.iter().filter(|u| u.is_craftsman()) {
        stats.total += 1;
        match user.verification_status() {
            VerificationStatus::Pending => stats.pending += 1,
            VerificationStatus::Verified => stats.verified += 1,
            VerificationStatus::Rejected => stats.rejected += 1,
            VerificationStatus::Other(_) => {}
        }
        if user.is_banned {
            stats.banned += 1;
        }
    }
    stats
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceStats {
    pub total: usize,
    /// Services offered by at least one craftsman.
    pub active: usize,
    pub unused: usize,
}

pub fn service_stats(services: &[Service], users: &[User]) -> ServiceStats {
    let counts = craftsmen_per_service_id(users);
    let active = services.iter().filter(|s| counts.contains_key(s.id.as_str())).count();
    ServiceStats { total: services.len(), active, unused: services.len() - active }
}

// =============================================================================
// CHART SERIES
// =============================================================================

/// Job counts per `YYYY-MM` of creation, oldest month first.
pub fn jobs_by_month(jobs: &[Job]) -> Vec<ChartPoint> {
    let mut months: BTreeMap<&str, usize> = BTreeMap::new();
    for month in jobs.iter().filter_map(|j| j.created_at.as_deref()).filter_map(month_key) {
        *months.entry(month).or_default() += 1;
    }
    months.into_iter().map(|(m, n)| ChartPoint::count(m, n)).collect()
}

/// Running total of registered users per month.
pub fn user_growth(users: &[User]) -> Vec<ChartPoint> {
    let mut months: BTreeMap<&str, usize> = BTreeMap::new();
    for month in users.iter().filter_map(|u| u.created_at.as_deref()).filter_map(month_key) {
        *months.entry(month).or_default() += 1;
    }
    let mut total = 0;
    months
        .into_iter()
        .map(|(m, n)| {
            total += n;
            ChartPoint::count(m, total)
        })
        .collect()
}

/// Name of a service reference: the populated name, else the catalog entry.
pub fn service_name(reference: &ServiceRef, services: &[Service], lang: Language) -> Option<String> {
    if let Some(name) = reference.name(lang) {
        return Some(name.to_owned());
    }
    services
        .iter()
        .find(|s| s.id == reference.id())
        .map(|s| s.name.pick(lang))
        .filter(|n| !n.is_empty())
        .map(str::to_owned)
}

/// Craftsmen grouped by service id and labelled by the service name;
/// unresolvable services share `unknown`. Largest group first.
pub fn craftsmen_by_service(users: &[User], services: &[Service], lang: Language, unknown: &str) -> Vec<ChartPoint> {
    let mut groups: HashMap<Option<&str>, (String, usize)> = HashMap::new();
    for user in users.iter().filter(|u| u.is_craftsman()) {
        let reference = user.craftsman_info.as_ref().and_then(|i| i.service.as_ref());
        let (key, label) = match reference.and_then(|r| Some((r.id(), service_name(r, services, lang)?))) {
            Some((id, name)) => (Some(id), name),
            None => (None, unknown.to_owned()),
        };
        groups.entry(key).or_insert_with(|| (label, 0)).1 += 1;
    }
    sorted_desc(groups.into_values())
}

/// Cities with the most craftsmen, case-folded, at most [`TOP_CITIES`].
pub fn top_cities(users: &[User], unknown: &str) -> Vec<ChartPoint> {
    let mut groups: HashMap<String, usize> = HashMap::new();
    for user in users.iter().filter(|u| u.is_craftsman()) {
        let city = user.city().trim().to_lowercase();
        let city = if city.is_empty() { unknown.to_owned() } else { city };
        *groups.entry(city).or_default() += 1;
    }
    let mut points = sorted_desc(groups);
    points.truncate(TOP_CITIES);
    points
}

/// Craftsman count per verification state, in review order, zeros omitted.
pub fn verification_distribution(users: &[User]) -> Vec<(VerificationStatus, usize)> {
    let mut order: Vec<(VerificationStatus, usize)> = vec![
        (VerificationStatus::Pending, 0),
        (VerificationStatus::Verified, 0),
        (VerificationStatus::Rejected, 0),
    ];
    for status in users.iter().filter(|u| u.is_craftsman()).map(User::verification_status) {
        match order.iter_mut().find(|(s, _)| *s == status) {
            Some((_, n)) => *n += 1,
            None => order.push((status, 1)),
        }
    }
    order.retain(|(_, n)| *n > 0);
    order
}

/// Average craftsman rating per service, two decimals. A service whose
/// craftsmen are all unrated shows zero.
pub fn ratings_by_service(users: &[User], services: &[Service], lang: Language) -> Vec<ChartPoint> {
    let mut groups: HashMap<&str, (String, f64, usize)> = HashMap::new();
    for user in users.iter().filter(|u| u.is_craftsman()) {
        let Some(reference) = user.craftsman_info.as_ref().and_then(|i| i.service.as_ref()) else {
            continue;
        };
        let Some(name) = service_name(reference, services, lang) else {
            continue;
        };
        let entry = groups.entry(reference.id()).or_insert_with(|| (name, 0.0, 0));
        if let Some(rating) = user.rating.filter(|r| r.is_finite()) {
            entry.1 += rating;
            entry.2 += 1;
        }
    }
    let mut rows: Vec<(&str, (String, f64, usize))> = groups.into_iter().collect();
    rows.sort_by(|a, b| a.1.0.cmp(&b.1.0).then_with(|| a.0.cmp(b.0)));
    rows.into_iter()
        .map(|(_, (label, sum, n))| {
            #[allow(clippy::cast_precision_loss)]
            let value = if n == 0 { 0.0 } else { round_to(sum / n as f64, 2) };
            ChartPoint { label, value }
        })
        .collect()
}

/// Craftsmen offering one catalog service and their share of all craftsmen.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceUsage {
    pub name: String,
    pub craftsmen: usize,
    /// Percentage with one decimal.
    pub percent: f64,
}

/// Usage of every catalog service that has at least one craftsman, most
/// used first.
pub fn service_usage(services: &[Service], users: &[User], lang: Language) -> Vec<ServiceUsage> {
    let counts = craftsmen_per_service_id(users);
    let craftsmen = users.iter().filter(|u| u.is_craftsman()).count();
    let mut usage: Vec<ServiceUsage> = services
        .iter()
        .filter_map(|s| {
            let n = counts.get(s.id.as_str()).copied().unwrap_or(0);
            if n == 0 {
                return None;
            }
            #[allow(clippy::cast_precision_loss)]
            let percent = round_to(n as f64 / craftsmen as f64 * 100.0, 1);
            Some(ServiceUsage { name: s.name.pick(lang).to_owned(), craftsmen: n, percent })
        })
        .collect();
    usage.sort_by(|a, b| b.craftsmen.cmp(&a.craftsmen).then_with(|| a.name.cmp(&b.name)));
    usage
}

/// Jobs per service id labelled by name, most requested first. Jobs
/// without a resolvable service are skipped.
pub fn jobs_per_service(jobs: &[Job], services: &[Service], lang: Language) -> Vec<ChartPoint> {
    let mut groups: HashMap<&str, (String, usize)> = HashMap::new();
    for reference in jobs.iter().filter_map(|j| j.service.as_ref()) {
        let Some(name) = service_name(reference, services, lang) else {
            continue;
        };
        groups.entry(reference.id()).or_insert_with(|| (name, 0)).1 += 1;
    }
    sorted_desc(groups.into_values())
}

/// Craftsmen per offered service id.
pub fn craftsmen_per_service_id(users: &[User]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for id in users.iter().filter(|u| u.is_craftsman()).filter_map(User::service_id) {
        *counts.entry(id).or_insert(0) += 1;
    }
    counts
}

/// Count desc, then label asc, for a stable chart order.
fn sorted_desc(groups: impl IntoIterator<Item = (String, usize)>) -> Vec<ChartPoint> {
    let mut entries: Vec<(String, usize)> = groups.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.into_iter().map(|(label, n)| ChartPoint::count(label, n)).collect()
}
