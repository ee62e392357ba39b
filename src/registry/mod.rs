//! Read-only client for a component registry.
//!
//! Every registry ecosystem serves the same JSON layout under its domain:
//!
//! | Resource | Path |
//! |---|---|
//! | component index | `/registry/index.json` |
//! | style list | `/registry/styles/index.json` |
//! | component with contents | `/registry/styles/{style}/{component}.json` |
//! | base-color palette | `/registry/colors/{baseColor}.json` |
//!
//! Requests are blocking single attempts. Retrying is left to the caller.

pub mod models;
pub mod transport;

pub use models::{ColorPalette, Component, ComponentFile, ComponentWithContents, Style};
pub use transport::{HttpResponse, HttpTransport, Transport};

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

use crate::core::{Result, SyncError};
use models::BaseColorDocument;

/// Client bound to one registry domain.
#[derive(Clone)]
pub struct RegistryClient {
    domain: String,
    transport: Arc<dyn Transport>,
}

impl RegistryClient {
    pub fn new(domain: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let domain = domain.into().trim_end_matches('/').to_string();
        Self { domain, transport }
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn fetch_component_index(&self) -> Result<Vec<Component>> {
        let url = format!("{}/registry/index.json", self.domain);
        self.get_json("index", &url)
    }

    pub fn fetch_component(&self, name: &str, style: &str) -> Result<ComponentWithContents> {
        let url = format!("{}/registry/styles/{style}/{name}.json", self.domain);
        self.get_json(name, &url)
    }

    pub fn fetch_styles(&self) -> Result<Vec<Style>> {
        let url = format!("{}/registry/styles/index.json", self.domain);
        self.get_json("styles", &url)
    }

    pub fn fetch_base_color_palette(&self, base_color: &str) -> Result<ColorPalette> {
        let url = format!("{}/registry/colors/{base_color}.json", self.domain);
        let document: BaseColorDocument = self.get_json(base_color, &url)?;
        Ok(document.into())
    }

    fn get_json<T: DeserializeOwned>(&self, name: &str, url: &str) -> Result<T> {
        debug!("GET {url}");
        let response = self.transport.get(url).map_err(|reason| SyncError::RegistryUnreachable {
            url: url.to_string(),
            reason,
        })?;

        if !response.is_success() || response.body.trim().is_empty() {
            debug!("Registry answered {} for {url}", response.status);
            return Err(SyncError::ComponentNotFound {
                name: name.to_string(),
                url: url.to_string(),
            });
        }

        serde_json::from_str(&response.body).map_err(|e| SyncError::MalformedRegistryResponse {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct StaticTransport {
        responses: HashMap<String, HttpResponse>,
    }

    impl Transport for StaticTransport {
        fn get(&self, url: &str) -> std::result::Result<HttpResponse, String> {
            self.responses.get(url).cloned().ok_or_else(|| "connection refused".to_string())
        }
    }

    fn client(entries: &[(&str, u16, &str)]) -> RegistryClient {
        let responses = entries
            .iter()
            .map(|(url, status, body)| {
                (
                    (*url).to_string(),
                    HttpResponse {
                        status: *status,
                        body: (*body).to_string(),
                    },
                )
            })
            .collect();
        RegistryClient::new("https://reg.test/", Arc::new(StaticTransport { responses }))
    }

    #[test]
    fn test_fetch_component() {
        let client = client(&[(
            "https://reg.test/registry/styles/default/button.json",
            200,
            r#"{"name":"button","type":"components:ui","files":[{"name":"button.tsx","content":"x"}]}"#,
        )]);

        let component = client.fetch_component("button", "default").unwrap();
        assert_eq!(component.name(), "button");
        assert_eq!(component.files.len(), 1);
    }

    #[test]
    fn test_not_found_and_empty_body() {
        let client = client(&[
            ("https://reg.test/registry/styles/default/nope.json", 404, "Not Found"),
            ("https://reg.test/registry/styles/default/empty.json", 200, "  "),
        ]);

        assert!(matches!(
            client.fetch_component("nope", "default"),
            Err(SyncError::ComponentNotFound { .. })
        ));
        assert!(matches!(
            client.fetch_component("empty", "default"),
            Err(SyncError::ComponentNotFound { .. })
        ));
    }

    #[test]
    fn test_malformed_body() {
        let client = client(&[("https://reg.test/registry/index.json", 200, "<html>")]);

        assert!(matches!(
            client.fetch_component_index(),
            Err(SyncError::MalformedRegistryResponse { .. })
        ));
    }

    #[test]
    fn test_unreachable() {
        let client = client(&[]);
        assert!(matches!(client.fetch_styles(), Err(SyncError::RegistryUnreachable { .. })));
    }

    #[test]
    fn test_fetch_palette() {
        let client = client(&[(
            "https://reg.test/registry/colors/slate.json",
            200,
            r#"{"inlineColors":{"light":{"primary":"slate-900"},"dark":{"primary":"slate-50"}},"cssVars":{}}"#,
        )]);

        let palette = client.fetch_base_color_palette("slate").unwrap();
        assert_eq!(palette.lookup("primary"), Some(("slate-900", "slate-50")));
    }
}
