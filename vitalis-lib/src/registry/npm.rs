use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// The subset of an npm registry packument (`/{name}`) that vitalis uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NpmPackage {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "dist-tags")]
    pub dist_tags: HashMap<String, String>,

    /// Publication time per version, plus `created` and `modified`. Unpublished
    /// packages carry an object under `unpublished`.
    #[serde(default)]
    pub time: HashMap<String, Value>,

    #[serde(default)]
    pub repository: Option<NpmRepository>,
}

/// The `repository` field of a package, in either of the two forms npm accepts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NpmRepository {
    /// `{"type": "git", "url": "..."}`
    Detailed {
        #[serde(default)]
        url: Option<String>,
    },

    /// `"github:user/repo"`, `"user/repo"`, or a plain URL.
    Shorthand(String),
}

impl NpmRepository {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Detailed { url } => url.as_deref(),
            Self::Shorthand(url) => Some(url),
        }
    }
}

impl NpmPackage {
    #[must_use]
    pub fn latest_version(&self) -> Option<&str> {
        self.dist_tags.get("latest").map(String::as_str)
    }

    /// Publication time of the latest version.
    #[must_use]
    pub fn latest_release_date(&self) -> Option<&str> {
        self.time.get(self.latest_version()?)?.as_str()
    }
}
