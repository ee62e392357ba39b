//! HTTP transport seam for registry requests.
//!
//! The registry client only needs "GET this URL, give me status and body". Keeping
//! that behind [`Transport`] lets tests serve registry documents from memory.

use std::time::Duration;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Blocking GET transport.
///
/// `Err` means the request never produced an HTTP status (DNS, TLS, connection).
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, String>;
}

/// Production transport on top of `reqwest::blocking`.
///
/// Must be created and dropped outside of an async runtime context.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Creates a transport with the given user agent and no request timeout.
    #[must_use]
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent.to_string())
            .timeout(None::<Duration>)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, String> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| format!("HTTP request failed: {e}"))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| format!("Failed to read response body: {e}"))?;

        Ok(HttpResponse { status, body })
    }
}
