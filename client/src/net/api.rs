//! REST API helpers for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, relative to
//! [`API_BASE`] which the host proxies to the backend.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Call sites show
//! [`ApiError::user_message`], which prefers the backend's own `message` and
//! otherwise falls back to a localized string supplied by the caller. Nothing
//! here retries; a failed call leaves UI state untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::types::{Job, LoginPayload, Quote, Service, User};
use crate::util::i18n::{self, Language};
use crate::util::upload::UploadFile;
use crate::util::validate::{ProfileDraft, ServiceDraft};

/// Same-origin prefix served by the host's reverse proxy.
pub const API_BASE: &str = "/api";

/// Collections are fetched whole and paged client-side.
pub const LIST_LIMIT: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("You are not authorized as admin.")]
    NotAdmin,
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message supplied by the backend, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for an error dialog: the backend message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }

    /// Like [`Self::user_message`], but errors raised by the client itself
    /// carry their own translated text.
    pub fn localized_message(&self, lang: Language, fallback_key: &'static str) -> String {
        match self {
            Self::NotAdmin => i18n::t(lang, "login.not_admin").to_owned(),
            _ => self.user_message(i18n::t(lang, fallback_key)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationAction {
    Approve,
    Reject,
}

impl VerificationAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: String,
}

// =============================================================================
// PATHS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn users_list_path() -> String {
    format!("/admin/users?page=1&limit={LIST_LIMIT}")
}

#[cfg(any(test, feature = "hydrate"))]
fn jobs_list_path() -> String {
    format!("/jobs?page=1&limit={LIST_LIMIT}")
}

#[cfg(any(test, feature = "hydrate"))]
fn ban_path(user_id: &str, banned: bool) -> String {
    let action = if banned { "ban" } else { "unban" };
    format!("/admin/users/{user_id}/{action}")
}

#[cfg(any(test, feature = "hydrate"))]
fn ban_body(user_id: &str, banned: bool) -> serde_json::Value {
    if banned { serde_json::json!({ "user_id": user_id }) } else { serde_json::json!({}) }
}

#[cfg(any(test, feature = "hydrate"))]
fn verification_path(user_id: &str, action: VerificationAction) -> String {
    format!("/admin/verifications/{user_id}/{}", action.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn job_path(job_id: &str) -> String {
    format!("/jobs/{job_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn job_quotes_path(job_id: &str) -> String {
    format!("/jobs/{job_id}/quotes")
}

#[cfg(any(test, feature = "hydrate"))]
fn service_path(service_id: Option<&str>) -> String {
    match service_id {
        Some(id) => format!("/services/{id}"),
        None => "/services".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Multipart text fields for a service create/update.
#[cfg(any(test, feature = "hydrate"))]
fn service_form_fields(draft: &ServiceDraft) -> Vec<(&'static str, String)> {
    vec![
        ("nameEn", draft.name_en.trim().to_owned()),
        ("nameAr", draft.name_ar.trim().to_owned()),
        ("descriptionEn", draft.description_en.trim().to_owned()),
        ("descriptionAr", draft.description_ar.trim().to_owned()),
    ]
}

/// Multipart text fields for the own-profile update. A blank phone is left
/// out rather than sent empty.
#[cfg(any(test, feature = "hydrate"))]
fn profile_form_fields(draft: &ProfileDraft) -> Vec<(&'static str, String)> {
    let mut fields = vec![("fullName", draft.full_name()), ("email", draft.email.trim().to_owned())];
    let phone = draft.phone.trim();
    if !phone.is_empty() {
        fields.push(("phone", phone.to_owned()));
    }
    fields
}

// =============================================================================
// TRANSPORT (hydrate only)
// =============================================================================

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;
    use serde_json::Value;

    use super::{ApiError, bearer, endpoint};
    use crate::net::envelope;

    pub(super) fn with_auth(builder: RequestBuilder) -> RequestBuilder {
        match crate::state::auth::stored_token() {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    pub(super) fn get(path: &str) -> RequestBuilder {
        with_auth(Request::get(&endpoint(path)))
    }

    pub(super) fn post(path: &str) -> RequestBuilder {
        with_auth(Request::post(&endpoint(path)))
    }

    pub(super) fn patch(path: &str) -> RequestBuilder {
        with_auth(Request::patch(&endpoint(path)))
    }

    pub(super) fn put(path: &str) -> RequestBuilder {
        with_auth(Request::put(&endpoint(path)))
    }

    pub(super) fn delete(path: &str) -> RequestBuilder {
        with_auth(Request::delete(&endpoint(path)))
    }

    pub(super) fn network(e: gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }

    pub(super) fn decode(e: serde_json::Error) -> ApiError {
        ApiError::Decode(e.to_string())
    }

    /// Read the body as JSON and turn non-2xx statuses into [`ApiError::Status`].
    pub(super) async fn read(resp: Response) -> Result<Value, ApiError> {
        let status = resp.status();
        let text = resp.text().await.map_err(network)?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        if !resp.ok() {
            log::warn!("api {} -> {status}", resp.url());
            return Err(ApiError::Status { status, message: envelope::error_message(&body) });
        }
        Ok(body)
    }

    pub(super) async fn send(request: Request) -> Result<Value, ApiError> {
        let resp = request.send().await.map_err(network)?;
        read(resp).await
    }

    pub(super) async fn send_builder(builder: RequestBuilder) -> Result<Value, ApiError> {
        let resp = builder.send().await.map_err(network)?;
        read(resp).await
    }

    pub(super) async fn list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
        let body = send_builder(get(path)).await?;
        envelope::unwrap_list(body).map_err(decode)
    }

    pub(super) fn form_data(
        fields: &[(&'static str, String)],
        file: Option<(&'static str, &crate::util::upload::UploadFile)>,
    ) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Decode("FormData unavailable".to_owned()))?;
        for (name, value) in fields {
            form.append_with_str(name, value)
                .map_err(|_| ApiError::Decode(format!("cannot append {name}")))?;
        }
        if let Some((name, upload)) = file {
            form.append_with_blob_and_filename(name, &upload.file, &upload.name)
                .map_err(|_| ApiError::Decode(format!("cannot append {name}")))?;
        }
        Ok(form)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/login` with the internal-account flag. Non-admin accounts are
/// rejected with [`ApiError::NotAdmin`] even when the backend accepted them.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, HTTP or decode failure.
pub async fn login(email: &str, password: &str) -> Result<LoginPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password, "type": "internal" });
        let request = gloo_net::http::Request::post(&endpoint("/auth/login"))
            .json(&payload)
            .map_err(transport::network)?;
        let body = transport::send(request).await?;
        let login: LoginPayload = super::envelope::unwrap_item(body).map_err(transport::decode)?;
        if login.user.role != super::types::Role::Admin {
            return Err(ApiError::NotAdmin);
        }
        Ok(login)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// `POST /auth/logout`, best effort. The local session is cleared regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = transport::send_builder(transport::post("/auth/logout")).await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// `PATCH /users/me` as multipart with an optional new profile picture.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, HTTP or decode failure.
pub async fn update_profile(draft: &ProfileDraft, picture: Option<&UploadFile>) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = transport::form_data(&profile_form_fields(draft), picture.map(|p| ("profilePicture", p)))?;
        let request = transport::patch("/users/me").body(form).map_err(transport::network)?;
        let body = transport::send(request).await?;
        super::envelope::unwrap_item(body).map_err(transport::decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (draft, picture);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// USERS
// =============================================================================

/// `GET /admin/users?page=1&limit=1000`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, HTTP or decode failure.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::list(&users_list_path()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `PATCH /admin/users/{id}/ban` or `/unban`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or HTTP failure.
pub async fn set_user_banned(user_id: &str, banned: bool) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::patch(&ban_path(user_id, banned))
            .json(&ban_body(user_id, banned))
            .map_err(transport::network)?;
        transport::send(request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, banned);
        Err(ApiError::Unavailable)
    }
}

/// `POST /admin/users/create-admin`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or HTTP failure.
pub async fn create_admin(request: &CreateAdminRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::post("/admin/users/create-admin")
            .json(request)
            .map_err(transport::network)?;
        transport::send(request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// VERIFICATIONS
// =============================================================================

/// `GET /admin/verifications` (craftsman user records).
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, HTTP or decode failure.
pub async fn fetch_verifications() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::list("/admin/verifications").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /admin/verifications/{id}/approve` or `/reject`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or HTTP failure.
pub async fn decide_verification(user_id: &str, action: VerificationAction) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::send_builder(transport::post(&verification_path(user_id, action)))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, action);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// JOBS
// =============================================================================

/// `GET /jobs?page=1&limit=1000`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, HTTP or decode failure.
pub async fn fetch_jobs() -> Result<Vec<Job>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::list(&jobs_list_path()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /jobs/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, HTTP or decode failure.
pub async fn fetch_job(job_id: &str) -> Result<Job, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = transport::send_builder(transport::get(&job_path(job_id))).await?;
        super::envelope::unwrap_item(body).map_err(transport::decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err(ApiError::Unavailable)
    }
}

/// `GET /jobs/{id}/quotes`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, HTTP or decode failure.
pub async fn fetch_job_quotes(job_id: &str) -> Result<Vec<Quote>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::list(&job_quotes_path(job_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// SERVICES
// =============================================================================

/// `GET /services`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, HTTP or decode failure.
pub async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::list(&service_path(None)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create (`POST /services`) or update (`PUT /services/{id}`) a service as
/// multipart, returning the saved record.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, HTTP or decode failure.
pub async fn save_service(
    service_id: Option<&str>,
    draft: &ServiceDraft,
    image: Option<&UploadFile>,
) -> Result<Service, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = transport::form_data(&service_form_fields(draft), image.map(|f| ("image", f)))?;
        let path = service_path(service_id);
        let builder = if service_id.is_some() { transport::put(&path) } else { transport::post(&path) };
        let request = builder.body(form).map_err(transport::network)?;
        let body = transport::send(request).await?;
        super::envelope::unwrap_item(body).map_err(transport::decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (service_id, draft, image);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /services/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or HTTP failure.
pub async fn delete_service(service_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::send_builder(transport::delete(&service_path(Some(service_id))))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = service_id;
        Err(ApiError::Unavailable)
    }
}
