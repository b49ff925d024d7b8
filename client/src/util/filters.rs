//! Per-page filter models for the table views.
//!
//! Each filter holds the raw control values of one page (search box plus
//! dropdowns) and knows how to test a record against them. Dropdown options
//! are built from the values actually present in the loaded collection.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use crate::net::types::{Job, Service, User};
use crate::util::i18n::{Language, role_label};
use crate::util::listing::{Choice, distinct_sorted, matches_search};

/// Select value for the ban dropdowns.
pub fn ban_key(banned: bool) -> &'static str {
    if banned { "banned" } else { "active" }
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
    pub status: Choice,
    pub role: Choice,
}

impl UserFilter {
    /// Search covers name, email, phone, raw and translated role, and country.
    pub fn matches(&self, user: &User, lang: Language) -> bool {
        let translated_role = role_label(lang, &user.role);
        let hit = matches_search(
            &self.search,
            [
                user.full_name.as_str(),
                user.email.as_str(),
                user.phone(),
                user.role.as_str(),
                translated_role.as_str(),
                user.country(),
            ],
        );
        hit && self.status.accepts(ban_key(user.is_banned)) && self.role.accepts(user.role.as_str())
    }

    pub fn apply(&self, users: &[User], lang: Language) -> Vec<User> {
        users.iter().filter(|u| self.matches(u, lang)).cloned().collect()
    }
}

/// Roles present in the list, for the role dropdown.
pub fn role_options(users: &[User]) -> Vec<String> {
    distinct_sorted(users.iter().map(|u| u.role.as_str()))
}

// =============================================================================
// CRAFTSMEN
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CraftsmanFilter {
    pub search: String,
    pub verification: Choice,
    pub ban: Choice,
    /// Service name in the current language.
    pub skill: Choice,
    pub city: Choice,
}

impl CraftsmanFilter {
    pub fn matches(&self, user: &User, lang: Language) -> bool {
        if !matches_search(&self.search, [user.full_name.as_str(), user.email.as_str(), user.phone()]) {
            return false;
        }
        let status = user.verification_status();
        if !self.verification.accepts(status.as_str()) || !self.ban.accepts(ban_key(user.is_banned)) {
            return false;
        }
        if !self.skill.is_all() {
            let skill = craftsman_skill(user, lang).unwrap_or("");
            if !self.skill.accepts(skill) {
                return false;
            }
        }
        self.city.accepts(user.city())
    }

    /// Craftsmen (role `craftsman`) passing every control.
    pub fn apply(&self, users: &[User], lang: Language) -> Vec<User> {
        users
            .iter()
            .filter(|u| u.is_craftsman() && self.matches(u, lang))
            .cloned()
            .collect()
    }
}

/// Name of the craftsman's service in exactly `lang`.
pub fn craftsman_skill(user: &User, lang: Language) -> Option<&str> {
    user.craftsman_info.as_ref()?.service.as_ref()?.exact_name(lang)
}

pub fn skill_options(users: &[User], lang: Language) -> Vec<String> {
    distinct_sorted(users.iter().filter(|u| u.is_craftsman()).filter_map(|u| craftsman_skill(u, lang)))
}

pub fn city_options(users: &[User]) -> Vec<String> {
    distinct_sorted(users.iter().filter(|u| u.is_craftsman()).map(User::city))
}

// =============================================================================
// JOBS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub search: String,
    pub status: Choice,
    /// Service name in the current language.
    pub service: Choice,
    pub payment: Choice,
}

impl JobFilter {
    pub fn matches(&self, job: &Job, lang: Language) -> bool {
        if !matches_search(&self.search, [job.title.as_str(), job.description.as_str()]) {
            return false;
        }
        if !self.status.accepts(job.status.as_str()) {
            return false;
        }
        if !self.service.is_all() && !self.service.accepts(job_service_name(job, lang).unwrap_or("")) {
            return false;
        }
        self.payment.is_all() || job.payment_type.as_ref().is_some_and(|p| self.payment.accepts(p.as_str()))
    }

    pub fn apply(&self, jobs: &[Job], lang: Language) -> Vec<Job> {
        jobs.iter().filter(|j| self.matches(j, lang)).cloned().collect()
    }
}

/// Populated service name of a job in `lang` (with fallback).
pub fn job_service_name(job: &Job, lang: Language) -> Option<&str> {
    job.service.as_ref()?.name(lang)
}

pub fn job_status_options(jobs: &[Job]) -> Vec<String> {
    distinct_sorted(jobs.iter().map(|j| j.status.as_str()))
}

pub fn job_service_options(jobs: &[Job], lang: Language) -> Vec<String> {
    distinct_sorted(jobs.iter().filter_map(|j| job_service_name(j, lang)))
}

pub fn payment_options(jobs: &[Job]) -> Vec<String> {
    distinct_sorted(jobs.iter().filter_map(|j| j.payment_type.as_ref()).map(|p| p.as_str()))
}

// =============================================================================
// SERVICES
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceFilter {
    pub search: String,
}

impl ServiceFilter {
    /// Search covers name and description as shown in `lang`.
    pub fn matches(&self, service: &Service, lang: Language) -> bool {
        matches_search(&self.search, [service.name.pick(lang), service.description.pick(lang)])
    }

    pub fn apply(&self, services: &[Service], lang: Language) -> Vec<Service> {
        services.iter().filter(|s| self.matches(s, lang)).cloned().collect()
    }
}
