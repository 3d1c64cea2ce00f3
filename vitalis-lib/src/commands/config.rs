use crate::Result;
use crate::analysis::DEFAULT_MAX_CONCURRENT_DEPENDENCIES;
use crate::health::{DEFAULT_GITHUB_API_URL, DEFAULT_GITLAB_API_URL, EvaluatorSettings, Policy};
use crate::registry::{DEFAULT_NPM_URL, DEFAULT_PYPI_URL};
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

const LOG_TARGET: &str = "    config";

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly.
pub const CONFIG_FILE_NAME: &str = "vitalis.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Days without activity after which a repository is unhealthy
    #[serde(default = "default_max_inactive_days")]
    pub max_inactive_days: u32,

    /// Whether a LICENSE file is required
    #[serde(default = "default_true")]
    pub require_license: bool,

    /// Whether a README file is required
    #[serde(default = "default_true")]
    pub require_readme: bool,

    /// Seconds to wait for a single upstream request
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Number of dependencies analyzed concurrently
    #[serde(default = "default_max_concurrent_dependencies")]
    pub max_concurrent_dependencies: usize,

    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    #[serde(default = "default_gitlab_api_url")]
    pub gitlab_api_url: String,

    #[serde(default = "default_pypi_url")]
    pub pypi_url: String,

    #[serde(default = "default_npm_url")]
    pub npm_url: String,
}

fn default_max_inactive_days() -> u32 {
    Policy::default().max_inactive_days
}

const fn default_true() -> bool {
    true
}

const fn default_request_timeout() -> u64 {
    10
}

const fn default_max_concurrent_dependencies() -> usize {
    DEFAULT_MAX_CONCURRENT_DEPENDENCIES
}

fn default_github_api_url() -> String {
    DEFAULT_GITHUB_API_URL.to_string()
}

fn default_gitlab_api_url() -> String {
    DEFAULT_GITLAB_API_URL.to_string()
}

fn default_pypi_url() -> String {
    DEFAULT_PYPI_URL.to_string()
}

fn default_npm_url() -> String {
    DEFAULT_NPM_URL.to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `vitalis.toml` in `base_dir` is used if it exists.
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading vitalis configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading vitalis configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!(target: LOG_TARGET, "Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.request_timeout == 0 {
            return Err(app_err!("request_timeout must be at least 1 second"));
        }

        if self.max_concurrent_dependencies == 0 {
            return Err(app_err!("max_concurrent_dependencies must be at least 1"));
        }

        for (name, value) in [
            ("github_api_url", &self.github_api_url),
            ("gitlab_api_url", &self.gitlab_api_url),
            ("pypi_url", &self.pypi_url),
            ("npm_url", &self.npm_url),
        ] {
            let _ = Url::parse(value).into_app_err_with(|| format!("{name} is not a valid URL: '{value}'"))?;
        }

        Ok(())
    }

    #[must_use]
    pub const fn policy(&self) -> Policy {
        Policy {
            max_inactive_days: self.max_inactive_days,
            require_license: self.require_license,
            require_readme: self.require_readme,
        }
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    #[must_use]
    pub fn evaluator_settings(&self, github_token: Option<String>, gitlab_token: Option<String>) -> EvaluatorSettings {
        EvaluatorSettings {
            github_api_url: self.github_api_url.clone(),
            gitlab_api_url: self.gitlab_api_url.clone(),
            github_token,
            gitlab_token,
            request_timeout: self.request_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
