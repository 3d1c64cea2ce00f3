//! Arguments and helpers shared by several commands.

use super::config::Config;
use crate::Result;
use crate::health::{HealthEvaluator, Policy};
use crate::manifest::{Dependency, ManifestKind, parse_manifest};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use std::fs;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Initialize the logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when commands run more than once in a process.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Access tokens for the hosting platforms
#[derive(Args, Debug, Clone, Default)]
pub struct TokenArgs {
    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitLab personal access token
    #[arg(long, value_name = "TOKEN", env = "GITLAB_TOKEN", hide_env_values = true)]
    pub gitlab_token: Option<String>,
}

/// Overrides for the health policy loaded from the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Days without activity after which a repository is unhealthy
    #[arg(long, value_name = "DAYS", help_heading = "Policy")]
    pub max_inactive_days: Option<u32>,

    /// Do not require a LICENSE file
    #[arg(long, help_heading = "Policy")]
    pub no_require_license: bool,

    /// Do not require a README file
    #[arg(long, help_heading = "Policy")]
    pub no_require_readme: bool,
}

impl PolicyArgs {
    #[must_use]
    pub fn apply(&self, mut policy: Policy) -> Policy {
        if let Some(days) = self.max_inactive_days {
            policy.max_inactive_days = days;
        }

        if self.no_require_license {
            policy.require_license = false;
        }

        if self.no_require_readme {
            policy.require_readme = false;
        }

        policy
    }
}

/// Build a health evaluator from the configuration and tokens, measuring inactivity from now.
pub fn health_evaluator(config: &Config, tokens: &TokenArgs) -> Result<HealthEvaluator> {
    let settings = config.evaluator_settings(tokens.github_token.clone(), tokens.gitlab_token.clone());
    HealthEvaluator::new(&settings, Utc::now())
}

/// Read and parse a manifest, inferring its kind from the file name unless given.
pub fn read_manifest(path: &Utf8Path, kind: Option<ManifestKind>) -> Result<Vec<Dependency>> {
    let kind = match kind {
        Some(kind) => kind,
        None => ManifestKind::from_file_name(path.file_name().unwrap_or(path.as_str()))
            .into_app_err("please specify the manifest type with --manifest-type")?,
    };

    let content = fs::read_to_string(path).into_app_err_with(|| format!("reading manifest file '{path}'"))?;
    parse_manifest(kind, &content).into_app_err_with(|| format!("parsing {kind} manifest '{path}'"))
}

/// Where the configuration is looked up when `--config` is not given.
#[must_use]
pub fn config_base_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(".")
}
