use super::{NpmPackage, ProviderResult, PypiPackage};
use crate::Result;
use crate::http::build_client;
use core::time::Duration;
use ohno::{EnrichableExt, bail};
use regex::Regex;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::{Arc, LazyLock};

const LOG_TARGET: &str = "  registry";

/// Base URL of PyPI's JSON API.
pub const DEFAULT_PYPI_URL: &str = "https://pypi.org/pypi";

/// Base URL of the public npm registry.
pub const DEFAULT_NPM_URL: &str = "https://registry.npmjs.org";

static PACKAGE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("invalid regex"));

/// Reject package names that contain anything other than ASCII letters, digits, dashes, and underscores.
pub fn validate_package_name(name: &str) -> Result<()> {
    if !PACKAGE_NAME_REGEX.is_match(name) {
        bail!("invalid package name '{name}': only alphanumeric characters, dashes, and underscores are allowed");
    }

    Ok(())
}

/// Client for the PyPI and npm registries.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    pypi_url: String,
    npm_url: String,
}

impl RegistryClient {
    pub fn new(pypi_url: impl Into<String>, npm_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout, None)?,
            pypi_url: pypi_url.into(),
            npm_url: npm_url.into(),
        })
    }

    /// Fetch a package's metadata from PyPI.
    ///
    /// # Errors
    ///
    /// Returns an error only if the package name is invalid. Network and decoding
    /// failures are reported through [`ProviderResult::Error`].
    pub async fn fetch_pypi(&self, name: &str) -> Result<ProviderResult<PypiPackage>> {
        validate_package_name(name)?;
        let url = format!("{}/{name}/json", self.pypi_url.trim_end_matches('/'));
        Ok(self.fetch(&url, name, "PyPI").await)
    }

    /// Fetch a package's metadata from the npm registry.
    ///
    /// # Errors
    ///
    /// Returns an error only if the package name is invalid. Network and decoding
    /// failures are reported through [`ProviderResult::Error`].
    pub async fn fetch_npm(&self, name: &str) -> Result<ProviderResult<NpmPackage>> {
        validate_package_name(name)?;
        let url = format!("{}/{name}", self.npm_url.trim_end_matches('/'));
        Ok(self.fetch(&url, name, "npm").await)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str, name: &str, registry: &str) -> ProviderResult<T> {
        log::info!(target: LOG_TARGET, "Querying {registry} for information on package '{name}'");

        match self.get_json(url).await {
            Ok(Some(data)) => ProviderResult::Found(data),
            Ok(None) => {
                log::debug!(target: LOG_TARGET, "Package '{name}' does not exist on {registry}");
                ProviderResult::NotFound
            }
            Err(e) => {
                let error = e.enrich_with(|| format!("fetching {registry} metadata for package '{name}'"));
                log::warn!(target: LOG_TARGET, "{error:#}");
                ProviderResult::Error(Arc::new(error))
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        let resp = self.client.get(url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let data = resp.error_for_status()?.json().await?;
        Ok(Some(data))
    }
}
