use super::client::Client;
use super::doc_files::{LICENSE_FILES, README_FILES};
use super::evaluator::{DocFiles, RepoMetadata};
use crate::Result;
use core::time::Duration;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::HeaderName;
use serde::Deserialize;
use serde::de::IgnoredAny;

/// Base URL of the public GitLab REST API.
pub const DEFAULT_GITLAB_API_URL: &str = "https://gitlab.com/api/v4";

/// Branch checked for files when the project does not report a default branch.
const FALLBACK_BRANCH: &str = "master";

const PRIVATE_TOKEN_HEADER: &str = "private-token";

/// Everything except RFC 3986 unreserved characters gets escaped in a file path segment.
const FILE_PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

#[derive(Debug, Deserialize)]
struct Project {
    last_activity_at: Option<String>,
    star_count: Option<u64>,
    forks_count: Option<u64>,
    default_branch: Option<String>,
}

/// Queries the GitLab REST API.
#[derive(Debug, Clone)]
pub struct GitLabApi {
    client: Client,
}

impl GitLabApi {
    pub fn new(base_url: impl Into<String>, token: Option<&str>, timeout: Duration) -> Result<Self> {
        let auth = token.map(|t| (HeaderName::from_static(PRIVATE_TOKEN_HEADER), t.to_string()));
        Ok(Self {
            client: Client::new(base_url, auth, timeout)?,
        })
    }

    pub(super) async fn metadata(&self, group: &str, project: &str) -> Result<RepoMetadata> {
        let data: Project = self.client.get_json(&project_path(group, project)).await?;
        Ok(RepoMetadata {
            last_activity: data.last_activity_at,
            stars_count: data.star_count,
            forks_count: data.forks_count,
            default_branch: data.default_branch,
        })
    }

    /// Count the open issues on the first page the API returns.
    pub(super) async fn open_issues(&self, group: &str, project: &str) -> Result<u64> {
        let path = format!("{}/issues", project_path(group, project));
        let issues: Vec<IgnoredAny> = self.client.get_json(&path).await?;
        Ok(issues.len() as u64)
    }

    /// Check the default branch for each known README and license file name.
    pub(super) async fn doc_files(&self, group: &str, project: &str, default_branch: Option<&str>) -> Result<DocFiles> {
        let branch = default_branch.unwrap_or(FALLBACK_BRANCH);
        Ok(DocFiles {
            has_readme: self.any_file_exists(group, project, branch, README_FILES).await?,
            has_license: self.any_file_exists(group, project, branch, LICENSE_FILES).await?,
        })
    }

    async fn any_file_exists(&self, group: &str, project: &str, branch: &str, candidates: &[&str]) -> Result<bool> {
        for name in candidates {
            let path = format!(
                "{}/repository/files/{}",
                project_path(group, project),
                utf8_percent_encode(name, FILE_PATH_ENCODE_SET)
            );

            if self.client.exists(&path, &[("ref", branch)]).await? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

fn project_path(group: &str, project: &str) -> String {
    format!("/projects/{group}%2F{project}")
}
