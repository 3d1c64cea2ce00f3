use super::client::Client;
use super::doc_files::{is_license, is_readme};
use super::evaluator::{DocFiles, RepoMetadata};
use crate::Result;
use core::time::Duration;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde::de::IgnoredAny;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

#[derive(Debug, Deserialize)]
struct Repository {
    pushed_at: Option<String>,
    stargazers_count: Option<u64>,
    forks_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
}

/// Queries the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubApi {
    client: Client,
}

impl GitHubApi {
    pub fn new(base_url: impl Into<String>, token: Option<&str>, timeout: Duration) -> Result<Self> {
        let auth = token.map(|t| (AUTHORIZATION, format!("token {t}")));
        Ok(Self {
            client: Client::new(base_url, auth, timeout)?.with_accept(GITHUB_MEDIA_TYPE),
        })
    }

    pub(super) async fn metadata(&self, owner: &str, repo: &str) -> Result<RepoMetadata> {
        let data: Repository = self.client.get_json(&format!("/repos/{owner}/{repo}")).await?;
        Ok(RepoMetadata {
            last_activity: data.pushed_at,
            stars_count: data.stargazers_count,
            forks_count: data.forks_count,
            default_branch: None,
        })
    }

    /// Count the open issues on the first page the API returns.
    pub(super) async fn open_issues(&self, owner: &str, repo: &str) -> Result<u64> {
        let issues: Vec<IgnoredAny> = self.client.get_json(&format!("/repos/{owner}/{repo}/issues")).await?;
        Ok(issues.len() as u64)
    }

    /// Look for README and license files in the root directory listing.
    ///
    /// Returns `None` when the API refuses to return the listing, as it does for an empty repository.
    pub(super) async fn doc_files(&self, owner: &str, repo: &str) -> Result<Option<DocFiles>> {
        let path = format!("/repos/{owner}/{repo}/contents");
        let Some(entries) = self.client.get_json_if_ok::<Vec<ContentEntry>>(&path).await? else {
            return Ok(None);
        };

        Ok(Some(DocFiles {
            has_readme: entries.iter().any(|entry| is_readme(&entry.name)),
            has_license: entries.iter().any(|entry| is_license(&entry.name)),
        }))
    }
}
