//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used to forward `/api` requests and the
//! backend base URL they are forwarded to.

use std::time::Duration;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub api_base_url: String,
}

impl AppState {
    /// Build state from config.
    ///
    /// # Errors
    ///
    /// Returns the client builder error if the TLS backend cannot initialize.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            // Redirects (e.g. after logout) are relayed to the browser untouched.
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, api_base_url: config.api_base_url.clone() })
    }
}
