// rfr-net/src/pypi.rs
//! Latest-release lookups against a PyPI-compatible JSON API.
use reqwest::blocking::Client;
use rfr_common::error::{Result, RfrError};
use serde_json::Value;
use tracing::{debug, error};

use crate::http::{build_http_client, validate_url};

#[derive(Debug, Clone)]
pub struct PypiClient {
    client: Client,
    index_url: String,
}

impl PypiClient {
    pub fn new(index_url: &str) -> Result<Self> {
        validate_url(index_url)?;
        Ok(Self {
            client: build_http_client()?,
            index_url: index_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn project_url(&self, name: &str) -> String {
        format!("{}/{}/json", self.index_url, name)
    }

    /// Asks the index for the newest release of `name`. One request, no retries.
    pub fn fetch_latest_version(&self, name: &str) -> Result<String> {
        let url = self.project_url(name);
        debug!("Requesting package metadata for '{}' from {}", name, url);

        let response = self.client.get(&url).send().map_err(|e| {
            error!("HTTP request failed for {}: {}", url, e);
            RfrError::LookupFailure(name.to_string(), e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!("Package index returned {} for {}", status, url);
            return Err(RfrError::LookupFailure(
                name.to_string(),
                format!("{url} returned HTTP {status}"),
            ));
        }

        let body = response
            .text()
            .map_err(|e| RfrError::LookupFailure(name.to_string(), e.to_string()))?;
        latest_version_from_json(name, &body)
    }
}

/// Extracts `info.version` from a project JSON document.
pub fn latest_version_from_json(name: &str, body: &str) -> Result<String> {
    let document: Value = serde_json::from_str(body)?;
    document
        .get("info")
        .and_then(|info| info.get("version"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            RfrError::LookupFailure(
                name.to_string(),
                "package metadata has no 'info.version' field".to_string(),
            )
        })
}
