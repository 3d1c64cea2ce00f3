use crate::repo::Platform;
use serde::{Deserialize, Serialize};

/// The health verdict for a single repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub repository_url: String,
    pub platform: Platform,
    pub owner: String,
    pub repo_name: String,

    /// Timestamp of the most recent activity, as reported by the platform.
    pub last_activity: Option<String>,
    pub days_since_last_activity: Option<u64>,
    pub open_issues_count: Option<u64>,
    pub stars_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub has_readme: bool,
    pub has_license: bool,

    /// Policy violations and informational notes, in the order they were found.
    pub warnings: Vec<String>,

    /// Failures that stopped the evaluation early.
    pub errors: Vec<String>,

    pub is_healthy: bool,
}

impl HealthCheckResult {
    fn new(platform: Platform, owner: &str, repo_name: &str) -> Self {
        Self {
            repository_url: format!("https://{}/{owner}/{repo_name}", platform.domain()),
            platform,
            owner: owner.to_string(),
            repo_name: repo_name.to_string(),
            last_activity: None,
            days_since_last_activity: None,
            open_issues_count: None,
            stars_count: None,
            forks_count: None,
            has_readme: false,
            has_license: false,
            warnings: Vec::new(),
            errors: Vec::new(),
            is_healthy: true,
        }
    }
}

/// Builds a [`HealthCheckResult`] step by step.
///
/// Warnings and errors can only be appended, and once the result has been marked
/// unhealthy nothing can mark it healthy again.
#[derive(Debug)]
pub struct HealthAccumulator {
    result: HealthCheckResult,
}

impl HealthAccumulator {
    #[must_use]
    pub fn new(platform: Platform, owner: &str, repo_name: &str) -> Self {
        Self {
            result: HealthCheckResult::new(platform, owner, repo_name),
        }
    }

    pub fn set_last_activity(&mut self, last_activity: String) {
        self.result.last_activity = Some(last_activity);
    }

    pub const fn set_days_since_last_activity(&mut self, days: u64) {
        self.result.days_since_last_activity = Some(days);
    }

    pub const fn set_open_issues(&mut self, count: u64) {
        self.result.open_issues_count = Some(count);
    }

    pub const fn set_popularity(&mut self, stars: u64, forks: u64) {
        self.result.stars_count = Some(stars);
        self.result.forks_count = Some(forks);
    }

    pub const fn set_doc_files(&mut self, has_readme: bool, has_license: bool) {
        self.result.has_readme = has_readme;
        self.result.has_license = has_license;
    }

    /// Record a note that does not affect the verdict.
    pub fn note(&mut self, warning: impl Into<String>) {
        self.result.warnings.push(warning.into());
    }

    /// Record a policy violation.
    pub fn violation(&mut self, warning: impl Into<String>) {
        self.result.warnings.push(warning.into());
        self.result.is_healthy = false;
    }

    /// Record a failure that aborted the evaluation.
    pub fn error(&mut self, error: impl Into<String>) {
        self.result.errors.push(error.into());
        self.result.is_healthy = false;
    }

    #[must_use]
    pub fn finish(self) -> HealthCheckResult {
        self.result
    }
}
