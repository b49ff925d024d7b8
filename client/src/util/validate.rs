//! Form drafts and their pre-submit checks.
//!
//! Validation here is cosmetic: it catches empty required fields and obvious
//! typos before a round trip. The backend remains the authority and its
//! error message is shown verbatim when it disagrees.
//!
//! Errors are i18n keys so views can render them in the current language.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

use crate::net::api::CreateAdminRequest;
use crate::net::types::{Service, User};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Field name -> i18n key of the message to show under it.
pub type FormErrors = BTreeMap<&'static str, &'static str>;

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot
/// inside the domain part with text on both sides.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn check_email(errors: &mut FormErrors, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        errors.insert("email", "validation.email_required");
    } else if !is_valid_email(email) {
        errors.insert("email", "validation.email_invalid");
    }
}

/// Uploaded images must be `image/*` and at most [`MAX_IMAGE_BYTES`].
///
/// # Errors
///
/// Returns the i18n key describing the rejection.
pub fn validate_image(mime: &str, size: u64) -> Result<(), &'static str> {
    if !mime.starts_with("image/") {
        return Err("validation.image_type");
    }
    if size > MAX_IMAGE_BYTES {
        return Err("validation.image_size");
    }
    Ok(())
}

/// Login requires both fields; shape is left to the backend.
///
/// # Errors
///
/// Returns the i18n key when a field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("login.fields_required");
    }
    Ok(())
}

// =============================================================================
// CREATE ADMIN
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: String,
}

impl Default for AdminDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            role: "admin".to_owned(),
        }
    }
}

impl AdminDraft {
    /// Check the draft and build the request body.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<CreateAdminRequest, FormErrors> {
        let mut errors = FormErrors::new();
        if self.full_name.trim().is_empty() {
            errors.insert("full_name", "validation.full_name_required");
        }
        check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.insert("password", "validation.password_required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert("password", "validation.password_short");
        }
        if !matches!(self.role.as_str(), "admin" | "moderator") {
            errors.insert("role", "validation.role_invalid");
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        let phone = self.phone.trim();
        Ok(CreateAdminRequest {
            full_name: self.full_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            phone: (!phone.is_empty()).then(|| phone.to_owned()),
            role: self.role.clone(),
        })
    }
}

// =============================================================================
// SERVICE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceDraft {
    pub name_en: String,
    pub name_ar: String,
    pub description_en: String,
    pub description_ar: String,
}

impl ServiceDraft {
    pub fn from_service(service: &Service) -> Self {
        Self {
            name_en: service.name.en.clone(),
            name_ar: service.name.ar.clone(),
            description_en: service.description.en.clone(),
            description_ar: service.description.ar.clone(),
        }
    }

    /// At least one language is required for both name and description.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.name_en.trim().is_empty() && self.name_ar.trim().is_empty() {
            errors.insert("name", "validation.service_name_required");
        }
        if self.description_en.trim().is_empty() && self.description_ar.trim().is_empty() {
            errors.insert("description", "validation.service_description_required");
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Split a full name at the first space: first word, then the rest.
pub fn split_full_name(full_name: &str) -> (String, String) {
    let trimmed = full_name.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_owned(), rest.trim().to_owned()),
        None => (trimmed.to_owned(), String::new()),
    }
}

impl ProfileDraft {
    pub fn from_user(user: &User) -> Self {
        let (first_name, last_name) = split_full_name(&user.full_name);
        Self {
            first_name,
            last_name,
            email: user.email.clone(),
            phone: user.phone().to_owned(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }

    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.first_name.trim().is_empty() {
            errors.insert("first_name", "validation.first_name_required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert("last_name", "validation.last_name_required");
        }
        check_email(&mut errors, &self.email);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
