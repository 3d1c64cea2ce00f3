use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A source-control hosting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    GitHub,
    GitLab,
    Bitbucket,
}

impl Platform {
    const ALL: [Self; 3] = [Self::GitHub, Self::GitLab, Self::Bitbucket];

    /// The public domain of the hosting service.
    #[must_use]
    pub const fn domain(self) -> &'static str {
        match self {
            Self::GitHub => "github.com",
            Self::GitLab => "gitlab.com",
            Self::Bitbucket => "bitbucket.org",
        }
    }

    /// Human-readable name used in messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::GitLab => "GitLab",
            Self::Bitbucket => "Bitbucket",
        }
    }

    /// Classify a URL host.
    ///
    /// The host must be the service's domain or one of its direct subdomains
    /// (`api.github.com`). Look-alike domains such as `github.example.com` or
    /// `notgithub.com` are not recognized.
    #[must_use]
    pub fn from_host(host: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|platform| {
            let domain = platform.domain();
            host == domain || host.strip_suffix(domain).is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}
