//! PyPI registry client for fetching Python package versions

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::CheckConfig;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::VersionSet;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// PyPI registry client
pub struct PypiRegistry {
    client: Client,
    base_url: String,
}

impl PypiRegistry {
    /// Creates a client for the index at `base_url`.
    ///
    /// With `verify_tls` off the client accepts any certificate and host name.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        verify_tls: bool,
    ) -> Result<Self, RegistryError> {
        if !verify_tls {
            warn!(
                "TLS verification is disabled for requests to {}",
                base_url
            );
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .danger_accept_invalid_certs(!verify_tls)
            .build()
            .map_err(RegistryError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &CheckConfig) -> Result<Self, RegistryError> {
        Self::new(&config.index_url, config.timeout(), config.verify_tls)
    }
}

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    releases: HashMap<String, serde_json::Value>,
}

#[async_trait]
impl Registry for PypiRegistry {
    async fn fetch_versions(&self, package_name: &str) -> Result<VersionSet, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching PyPI package: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            debug!("Package {} is not published on {}", package_name, self.base_url);
            return Ok(VersionSet::empty());
        }

        if !status.is_success() {
            warn!("PyPI returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "PyPI API returned status {}",
                status
            )));
        }

        let pypi_response: PypiResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse PyPI response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let versions = VersionSet::new(pypi_response.releases.into_keys().collect());

        debug!(
            "Found {} versions for package {} (latest: {:?})",
            versions.len(),
            package_name,
            versions.latest()
        );

        Ok(versions)
    }
}
