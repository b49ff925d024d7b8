//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no domain data of its own: it holds the immutable config and a
//! pooled HTTP client used to forward dashboard API calls to the backend.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an HTTP client honoring the configured proxy timeout.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` builder error if the TLS backend fails to initialize.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
