use super::Platform;
use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use url::Url;

/// Prefix of the VCS-scheme convention used by registries (`git+https://...`).
const VCS_SCHEME_PREFIX: &str = "git+";

/// The resolved identity of a project on a known hosting platform.
///
/// An unresolvable URL is represented by the absence of a `RepoRef`, so platform,
/// organization, and repository name are always all present together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    platform: Platform,
    organization: String,
    repository: String,
}

impl RepoRef {
    #[must_use]
    pub fn new(platform: Platform, organization: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            platform,
            organization: organization.into(),
            repository: repository.into(),
        }
    }

    /// Parse an arbitrary repository URL.
    ///
    /// Returns `None` when the string is not a URL, has fewer than two non-empty path
    /// segments, or points at a host other than one of the known public platforms.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.strip_prefix(VCS_SCHEME_PREFIX).unwrap_or(url);
        let parsed = Url::parse(url).ok()?;

        let mut segments = parsed.path().split('/').filter(|segment| !segment.is_empty());
        let organization = segments.next()?;
        let repository = segments.next()?;
        let repository = repository.strip_suffix(".git").unwrap_or(repository);

        if repository.is_empty() {
            return None;
        }

        let platform = Platform::from_host(parsed.host_str()?)?;

        Some(Self::new(platform, organization, repository))
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// The canonical web URL of the repository.
    #[must_use]
    pub fn web_url(&self) -> String {
        format!("https://{}/{}/{}", self.platform.domain(), self.organization, self.repository)
    }
}

impl Display for RepoRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.web_url())
    }
}
