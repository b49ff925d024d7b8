//! Host configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard talks to a separate REST backend. The browser only ever sees
//! relative `/api/...` URLs; this host forwards them to `BACKEND_URL`, so the
//! backend location is a deployment concern rather than a build-time one.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
/// Service images and profile pictures are capped at 5 MiB client-side; the
/// rest covers multipart framing and text fields.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 12 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
    #[error("BACKEND_URL must start with http:// or https://, got {0}")]
    BackendScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend API root without a trailing slash.
    pub backend_url: String,
    pub proxy_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:5000/api`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    /// - `MAX_UPLOAD_BYTES`: default 12 MiB
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let proxy_timeout_secs = parse_or("PROXY_TIMEOUT_SECS", lookup("PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;
        let max_upload_bytes = parse_or("MAX_UPLOAD_BYTES", lookup("MAX_UPLOAD_BYTES"), DEFAULT_MAX_UPLOAD_BYTES)?;
        let backend_url = normalize_backend_url(
            lookup("BACKEND_URL")
                .filter(|v| !v.trim().is_empty())
                .as_deref()
                .unwrap_or(DEFAULT_BACKEND_URL),
        )?;

        Ok(Self { port, backend_url, proxy_timeout_secs, max_upload_bytes })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn normalize_backend_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::BackendScheme(trimmed.to_owned()));
    }
    Ok(trimmed.to_owned())
}
