// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the EQOweb API.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::command::Message;
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

// ============================================================================
// HttpConfig - Connection and login settings
// ============================================================================

/// Configuration for an EQOweb controller.
///
/// # Examples
///
/// ```
/// use eqoweb_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Factory defaults: user "QBUS", empty password, 1 second timeout
/// let config = HttpConfig::new("192.168.1.50:8444");
/// assert_eq!(config.base_url(), "http://192.168.1.50:8444");
///
/// // With all options
/// let config = HttpConfig::new("https://eqoweb.local/")
///     .with_credentials("QBUS", "secret")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "https://eqoweb.local");
/// ```
#[derive(Clone)]
pub struct HttpConfig {
    url: String,
    user: String,
    password: String,
    timeout: Duration,
}

impl HttpConfig {
    /// Default login user.
    pub const DEFAULT_USER: &'static str = "QBUS";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

    /// Creates a configuration for the controller at `url`.
    ///
    /// A URL without scheme is treated as plain HTTP.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user: Self::DEFAULT_USER.to_string(),
            password: String::new(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the login credentials.
    #[must_use]
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = user.into();
        self.password = password.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the login user.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the login password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        let url = self.url.trim().trim_end_matches('/');
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("http://{url}")
        }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.url.trim().trim_end_matches('/').is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "controller URL is required".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: self.base_url(),
            client,
        })
    }
}

impl std::fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// HttpClient - Session with the controller
// ============================================================================

/// HTTP session with an EQOweb controller.
///
/// Every message is posted to `<base-url>/default.aspx` as the form field
/// `strJSON`, with a fresh random `r` query parameter to defeat caches.
/// Cookies set by the controller are kept for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Path of the EQOweb endpoint.
    pub const ENDPOINT: &'static str = "default.aspx";

    /// Creates a client with default settings for the controller at `url`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(url: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(url).into_client()
    }

    /// Returns the base URL of the controller.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self) -> String {
        format!("{}/{}", self.base_url, Self::ENDPOINT)
    }
}

impl Protocol for HttpClient {
    async fn send_message(&self, message: &Message) -> Result<CommandResponse, ProtocolError> {
        let url = self.endpoint_url();
        let nonce: f64 = rand::random();

        tracing::debug!(url = %url, code = %message.code(), "Sending EQOweb message");

        let response = self
            .client
            .post(&url)
            .query(&[("r", nonce)])
            .form(&[("strJSON", message.to_json())])
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::trace!(body = %body, "Received EQOweb response");

        Ok(CommandResponse::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = HttpConfig::new("192.168.1.50");
        assert_eq!(config.user(), "QBUS");
        assert_eq!(config.password(), "");
        assert_eq!(config.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn config_with_credentials() {
        let config = HttpConfig::new("192.168.1.50").with_credentials("admin", "secret");
        assert_eq!(config.user(), "admin");
        assert_eq!(config.password(), "secret");
    }

    #[test]
    fn config_with_timeout() {
        let config = HttpConfig::new("192.168.1.50").with_timeout(Duration::from_secs(30));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn base_url_adds_scheme() {
        assert_eq!(
            HttpConfig::new("192.168.1.50:8444").base_url(),
            "http://192.168.1.50:8444"
        );
    }

    #[test]
    fn base_url_keeps_scheme_and_trims_slash() {
        assert_eq!(
            HttpConfig::new("https://eqoweb.local/").base_url(),
            "https://eqoweb.local"
        );
    }

    #[test]
    fn debug_hides_password() {
        let config = HttpConfig::new("host").with_credentials("QBUS", "hunter2");
        assert!(!format!("{config:?}").contains("hunter2"));
    }

    #[test]
    fn empty_url_is_rejected() {
        let result = HttpConfig::new(" / ").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn endpoint_url() {
        let client = HttpClient::new("10.0.0.2").unwrap();
        assert_eq!(client.base_url(), "http://10.0.0.2");
        assert_eq!(client.endpoint_url(), "http://10.0.0.2/default.aspx");
    }
}
