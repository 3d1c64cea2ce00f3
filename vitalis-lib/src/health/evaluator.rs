use super::github::{DEFAULT_GITHUB_API_URL, GitHubApi};
use super::gitlab::{DEFAULT_GITLAB_API_URL, GitLabApi};
use super::health_check_result::{HealthAccumulator, HealthCheckResult};
use super::timestamp::{days_since, parse_timestamp};
use super::{LOG_TARGET, Policy};
use crate::Result;
use crate::http::DEFAULT_REQUEST_TIMEOUT;
use crate::repo::{Platform, RepoRef};
use chrono::{DateTime, Utc};
use core::time::Duration;

/// Inactivity beyond this many days is reported even when the policy allows it.
const NOTEWORTHY_INACTIVE_DAYS: u64 = 90;

/// Repository metadata common to every platform.
#[derive(Debug, Default)]
pub(super) struct RepoMetadata {
    pub last_activity: Option<String>,
    pub stars_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub default_branch: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct DocFiles {
    pub has_readme: bool,
    pub has_license: bool,
}

/// Where the evaluator finds each platform and how it authenticates.
#[derive(Debug, Clone)]
pub struct EvaluatorSettings {
    pub github_api_url: String,
    pub gitlab_api_url: String,
    pub github_token: Option<String>,
    pub gitlab_token: Option<String>,
    pub request_timeout: Duration,
}

impl Default for EvaluatorSettings {
    fn default() -> Self {
        Self {
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            gitlab_api_url: DEFAULT_GITLAB_API_URL.to_string(),
            github_token: None,
            gitlab_token: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// A platform the evaluator knows how to query.
#[derive(Debug, Clone, Copy)]
enum Strategy<'a> {
    GitHub(&'a GitHubApi),
    GitLab(&'a GitLabApi),
}

impl Strategy<'_> {
    const fn platform(self) -> Platform {
        match self {
            Self::GitHub(_) => Platform::GitHub,
            Self::GitLab(_) => Platform::GitLab,
        }
    }

    async fn metadata(self, owner: &str, repo: &str) -> Result<RepoMetadata> {
        match self {
            Self::GitHub(api) => api.metadata(owner, repo).await,
            Self::GitLab(api) => api.metadata(owner, repo).await,
        }
    }

    async fn open_issues(self, owner: &str, repo: &str) -> Result<u64> {
        match self {
            Self::GitHub(api) => api.open_issues(owner, repo).await,
            Self::GitLab(api) => api.open_issues(owner, repo).await,
        }
    }

    /// Detect documentation files, or `None` when the platform would not say.
    async fn doc_files(self, owner: &str, repo: &str, metadata: &RepoMetadata) -> Result<Option<DocFiles>> {
        match self {
            Self::GitHub(api) => api.doc_files(owner, repo).await,
            Self::GitLab(api) => api.doc_files(owner, repo, metadata.default_branch.as_deref()).await.map(Some),
        }
    }
}

/// Evaluates repositories on GitHub and GitLab against a [`Policy`].
///
/// Every evaluation measures inactivity relative to the same instant, so evaluating
/// the same repository twice against the same upstream data yields the same result.
#[derive(Debug, Clone)]
pub struct HealthEvaluator {
    github: GitHubApi,
    gitlab: GitLabApi,
    now: DateTime<Utc>,
}

impl HealthEvaluator {
    pub fn new(settings: &EvaluatorSettings, now: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            github: GitHubApi::new(&settings.github_api_url, settings.github_token.as_deref(), settings.request_timeout)?,
            gitlab: GitLabApi::new(&settings.gitlab_api_url, settings.gitlab_token.as_deref(), settings.request_timeout)?,
            now,
        })
    }

    /// Evaluate a resolved repository.
    ///
    /// Returns `None` for platforms without a supported API.
    pub async fn evaluate(&self, repo: &RepoRef, policy: &Policy) -> Option<HealthCheckResult> {
        let strategy = match repo.platform() {
            Platform::GitHub => Strategy::GitHub(&self.github),
            Platform::GitLab => Strategy::GitLab(&self.gitlab),
            Platform::Bitbucket => {
                log::debug!(target: LOG_TARGET, "Health checks are not supported for Bitbucket repository '{repo}'");
                return None;
            }
        };

        Some(self.run(strategy, repo.organization(), repo.repository(), policy).await)
    }

    pub async fn evaluate_github(&self, owner: &str, repo: &str, policy: &Policy) -> HealthCheckResult {
        self.run(Strategy::GitHub(&self.github), owner, repo, policy).await
    }

    pub async fn evaluate_gitlab(&self, group: &str, project: &str, policy: &Policy) -> HealthCheckResult {
        self.run(Strategy::GitLab(&self.gitlab), group, project, policy).await
    }

    async fn run(&self, strategy: Strategy<'_>, owner: &str, repo: &str, policy: &Policy) -> HealthCheckResult {
        let platform = strategy.platform();
        log::info!(target: LOG_TARGET, "Checking health of {} repository '{owner}/{repo}'", platform.display_name());

        let mut acc = HealthAccumulator::new(platform, owner, repo);
        if let Err(e) = self.check(strategy, owner, repo, policy, &mut acc).await {
            log::warn!(target: LOG_TARGET, "Could not check {} repository '{owner}/{repo}': {e:#}", platform.display_name());
            acc.error(format!("Error checking {} repository: {e:#}", platform.display_name()));
        }

        acc.finish()
    }

    /// Run the evaluation steps in order, stopping at the first failure.
    async fn check(&self, strategy: Strategy<'_>, owner: &str, repo: &str, policy: &Policy, acc: &mut HealthAccumulator) -> Result<()> {
        let metadata = strategy.metadata(owner, repo).await?;

        if let Some(last_activity) = &metadata.last_activity {
            acc.set_last_activity(last_activity.clone());

            let days = days_since(parse_timestamp(last_activity)?, self.now);
            acc.set_days_since_last_activity(days);

            if days > u64::from(policy.max_inactive_days) {
                acc.violation(format!("Repository has been inactive for over {} days", policy.max_inactive_days));
            } else if days > NOTEWORTHY_INACTIVE_DAYS {
                acc.note(format!("Repository has been inactive for over {NOTEWORTHY_INACTIVE_DAYS} days"));
            }
        }

        acc.set_open_issues(strategy.open_issues(owner, repo).await?);
        acc.set_popularity(metadata.stars_count.unwrap_or(0), metadata.forks_count.unwrap_or(0));

        let Some(docs) = strategy.doc_files(owner, repo, &metadata).await? else {
            log::debug!(target: LOG_TARGET, "Root directory listing of '{owner}/{repo}' is unavailable, skipping documentation checks");
            return Ok(());
        };
        acc.set_doc_files(docs.has_readme, docs.has_license);

        if policy.require_readme && !docs.has_readme {
            acc.violation("No README file found");
        }

        if policy.require_license && !docs.has_license {
            acc.violation("No LICENSE file found");
        }

        Ok(())
    }
}
