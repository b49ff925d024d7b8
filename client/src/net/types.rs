//! Wire types mirrored from the marketplace REST backend.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes: fields go missing, arrive as `null`, or
//! switch between a bare id and a populated document depending on the
//! endpoint. Every record here deserializes leniently (missing and `null`
//! both become the default) so one odd row never blanks a whole table.
//! Enumerated fields keep unknown values verbatim in an `Other` variant.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::util::i18n::Language;

/// Treat `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// ENUMERATED FIELDS
// =============================================================================

/// Account role. Unknown roles are kept so filters can still offer them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Moderator,
    #[default]
    Client,
    Craftsman,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Client => "client",
            Self::Craftsman => "craftsman",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "moderator" => Self::Moderator,
            "client" => Self::Client,
            "craftsman" => Self::Craftsman,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// Craftsman identity-verification state. The wire value is case-insensitive
/// and a missing value means the craftsman has not been reviewed yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
    Other(String),
}

impl VerificationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for VerificationStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "pending" => Self::Pending,
            "verified" => Self::Verified,
            "rejected" => Self::Rejected,
            _ => Self::Other(raw),
        }
    }
}

impl From<VerificationStatus> for String {
    fn from(status: VerificationStatus) -> Self {
        status.as_str().to_owned()
    }
}

/// Job lifecycle state as the backend spells it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    #[default]
    Posted,
    Quoted,
    Hired,
    OnTheWay,
    Completed,
    Cancelled,
    Disputed,
    Other(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Posted => "Posted",
            Self::Quoted => "Quoted",
            Self::Hired => "Hired",
            Self::OnTheWay => "On The Way",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Disputed => "Disputed",
            Self::Other(raw) => raw,
        }
    }

    /// Work has been agreed but not finished.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::Hired | Self::OnTheWay)
    }

    /// Anything not yet closed, including jobs still collecting offers.
    pub fn is_ongoing(&self) -> bool {
        matches!(self, Self::Posted | Self::Quoted | Self::Hired | Self::OnTheWay)
    }
}

impl From<String> for JobStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Posted" => Self::Posted,
            "Quoted" => Self::Quoted,
            "Hired" => Self::Hired,
            "On The Way" => Self::OnTheWay,
            "Completed" => Self::Completed,
            "Cancelled" => Self::Cancelled,
            "Disputed" => Self::Disputed,
            _ => Self::Other(raw),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_owned()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentType {
    #[default]
    Cash,
    Visa,
    Other(String),
}

impl PaymentType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cash => "cash",
            Self::Visa => "visa",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for PaymentType {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "cash" => Self::Cash,
            "visa" => Self::Visa,
            _ => Self::Other(raw),
        }
    }
}

impl From<PaymentType> for String {
    fn from(payment: PaymentType) -> Self {
        payment.as_str().to_owned()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuoteStatus {
    #[default]
    Submitted,
    Accepted,
    Declined,
    Other(String),
}

impl QuoteStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Submitted => "Submitted",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for QuoteStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Submitted" => Self::Submitted,
            "Accepted" => Self::Accepted,
            "Declined" => Self::Declined,
            _ => Self::Other(raw),
        }
    }
}

impl From<QuoteStatus> for String {
    fn from(status: QuoteStatus) -> Self {
        status.as_str().to_owned()
    }
}

// =============================================================================
// BILINGUAL TEXT
// =============================================================================

/// English/Arabic text pair. A plain string on the wire is read as English.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LocalizedWire")]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LocalizedWire {
    Pair {
        #[serde(default, deserialize_with = "nullable")]
        en: String,
        #[serde(default, deserialize_with = "nullable")]
        ar: String,
    },
    Plain(String),
}

impl From<LocalizedWire> for LocalizedText {
    fn from(wire: LocalizedWire) -> Self {
        match wire {
            LocalizedWire::Pair { en, ar } => Self { en, ar },
            LocalizedWire::Plain(en) => Self { en, ar: String::new() },
        }
    }
}

impl LocalizedText {
    /// Text in `lang`, falling back to English, then Arabic, then empty.
    pub fn pick(&self, lang: Language) -> &str {
        let preferred = match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        };
        [preferred, &self.en, &self.ar]
            .into_iter()
            .find(|s| !s.trim().is_empty())
            .map_or("", String::as_str)
    }

    /// Text in `lang` only, without fallback.
    pub fn exact(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty() && self.ar.trim().is_empty()
    }
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, deserialize_with = "nullable")]
    pub street: String,
    #[serde(default, deserialize_with = "nullable")]
    pub city: String,
    #[serde(default, deserialize_with = "nullable")]
    pub state: String,
    #[serde(default, deserialize_with = "nullable")]
    pub country: String,
}

impl Address {
    /// `"street, city, state"` skipping blank parts.
    pub fn short_line(&self) -> String {
        [&self.street, &self.city, &self.state]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(default, deserialize_with = "nullable")]
    pub balance: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub withdrawable_balance: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLogs {
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub last_logout: Option<String>,
    #[serde(default, rename = "lastIP")]
    pub last_ip: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDoc {
    #[serde(default, deserialize_with = "nullable")]
    pub doc_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub doc_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub doc_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraftsmanInfo {
    #[serde(default)]
    pub service: Option<ServiceRef>,
    #[serde(default, deserialize_with = "nullable")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub verification_status: VerificationStatus,
    #[serde(default, deserialize_with = "nullable")]
    pub verification_docs: Vec<VerificationDoc>,
    #[serde(default, deserialize_with = "nullable")]
    pub portfolio_image_urls: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub full_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub role: Role,
    #[serde(default, deserialize_with = "nullable")]
    pub is_banned: bool,
    #[serde(default, rename = "isBanned_reason")]
    pub is_banned_reason: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub wallet: Option<Wallet>,
    #[serde(default)]
    pub user_logs: Option<UserLogs>,
    #[serde(default)]
    pub craftsman_info: Option<CraftsmanInfo>,
}

impl User {
    /// Name for display, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() { &self.email } else { &self.full_name }
    }

    pub fn city(&self) -> &str {
        self.address.as_ref().map_or("", |a| a.city.as_str())
    }

    pub fn country(&self) -> &str {
        self.address.as_ref().map_or("", |a| a.country.as_str())
    }

    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }

    pub fn is_craftsman(&self) -> bool {
        self.role == Role::Craftsman
    }

    pub fn verification_status(&self) -> VerificationStatus {
        self.craftsman_info
            .as_ref()
            .map(|info| info.verification_status.clone())
            .unwrap_or_default()
    }

    /// Id of the service this craftsman offers, if any.
    pub fn service_id(&self) -> Option<&str> {
        self.craftsman_info.as_ref()?.service.as_ref().map(ServiceRef::id)
    }

    /// Avatar URL, or a generated initials avatar when none was uploaded.
    pub fn avatar_url(&self) -> String {
        match self.profile_picture.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(url) => url.to_owned(),
            None => fallback_avatar_url(self.display_name()),
        }
    }
}

/// Initials avatar used whenever a user has no uploaded picture.
pub fn fallback_avatar_url(name: &str) -> String {
    let encoded: String = name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '+' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '+')
        .collect();
    format!("https://ui-avatars.com/api/?name={encoded}&background=random")
}

/// A user field that may hold a bare id or the populated user document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    User(Box<User>),
}

impl UserRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::User(user) => &user.id,
        }
    }

    pub fn populated(&self) -> Option<&User> {
        match self {
            Self::Id(_) => None,
            Self::User(user) => Some(user),
        }
    }
}

// =============================================================================
// SERVICES
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: LocalizedText,
    #[serde(default, deserialize_with = "nullable")]
    pub description: LocalizedText,
    #[serde(default, alias = "icon")]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A service field that may hold a bare id or the populated service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceRef {
    Id(String),
    Service(Box<Service>),
}

impl ServiceRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Service(service) => &service.id,
        }
    }

    /// Localized name when the service document was populated.
    pub fn name(&self, lang: Language) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Service(service) => Some(service.name.pick(lang)).filter(|n| !n.is_empty()),
        }
    }

    /// Name in exactly `lang`, as used by the craftsman skill filter.
    pub fn exact_name(&self, lang: Language) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Service(service) => Some(service.name.exact(lang)).filter(|n| !n.is_empty()),
        }
    }
}

// =============================================================================
// JOBS & QUOTES
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// `[longitude, latitude]` as stored by the backend.
    #[serde(default, deserialize_with = "nullable")]
    pub coordinates: Vec<f64>,
}

impl GeoPoint {
    /// `(latitude, longitude)` when both coordinates are present.
    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        match self.coordinates.as_slice() {
            [lng, lat, ..] => Some((*lat, *lng)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: JobStatus,
    #[serde(default)]
    pub payment_type: Option<PaymentType>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default, deserialize_with = "nullable")]
    pub photos: Vec<String>,
    #[serde(default)]
    pub service: Option<ServiceRef>,
    #[serde(default)]
    pub client: Option<UserRef>,
    #[serde(default)]
    pub craftsman: Option<UserRef>,
    #[serde(default)]
    pub job_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Job {
    pub fn service_id(&self) -> Option<&str> {
        self.service.as_ref().map(ServiceRef::id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub price: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub status: QuoteStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub craftsman: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// =============================================================================
// AUTH
// =============================================================================

/// Login response body (inside the `data` envelope).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    pub user: User,
}
