use super::PackageInfo;
use crate::health::HealthCheckResult;
use serde::{Deserialize, Serialize};

/// Message attached to dependencies whose repository could not be evaluated.
pub const NO_SUPPORTED_REPOSITORY: &str = "No supported repository URL found for health check.";

/// The outcome of analyzing one dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyReport {
    pub dependency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_info: Option<PackageInfo>,

    #[serde(default)]
    pub health: Option<HealthCheckResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Set when the dependency's registry metadata could not be obtained.
    #[serde(default)]
    pub error: bool,
}

/// How a report counts toward the summary of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Healthy,
    Unhealthy,
    Unchecked,
}

impl DependencyReport {
    #[must_use]
    pub fn evaluated(dependency: &str, package_info: PackageInfo, health: HealthCheckResult) -> Self {
        Self {
            dependency: dependency.to_string(),
            package_info: Some(package_info),
            health: Some(health),
            message: None,
            error: false,
        }
    }

    #[must_use]
    pub fn unevaluated(dependency: &str, package_info: PackageInfo) -> Self {
        Self {
            dependency: dependency.to_string(),
            package_info: Some(package_info),
            health: None,
            message: Some(NO_SUPPORTED_REPOSITORY.to_string()),
            error: false,
        }
    }

    #[must_use]
    pub fn failed(dependency: &str, message: impl Into<String>) -> Self {
        Self {
            dependency: dependency.to_string(),
            package_info: None,
            health: None,
            message: Some(message.into()),
            error: true,
        }
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match &self.health {
            Some(health) if health.is_healthy => Verdict::Healthy,
            Some(_) => Verdict::Unhealthy,
            None => Verdict::Unchecked,
        }
    }
}
