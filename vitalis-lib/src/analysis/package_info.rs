use crate::registry::{NpmPackage, PypiPackage};
use crate::repo::{Platform, ResolvedRepository};
use serde::{Deserialize, Serialize};

/// What a registry says about a package and where its source lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub summary: Option<String>,
    pub repository_url: Option<String>,
    pub repository_platform: Option<Platform>,
    pub repository_org: Option<String>,
    pub repository_name: Option<String>,
    pub latest_version: Option<String>,

    /// Release date of the latest version.
    pub created_date: Option<String>,
}

impl PackageInfo {
    #[must_use]
    pub fn from_pypi(package: &PypiPackage, resolved: &ResolvedRepository) -> Self {
        Self {
            summary: package.info.summary.clone(),
            latest_version: package.info.version.clone(),
            created_date: package.latest_release_date().map(str::to_string),
            ..Self::with_repository(resolved)
        }
    }

    #[must_use]
    pub fn from_npm(package: &NpmPackage, resolved: &ResolvedRepository) -> Self {
        Self {
            summary: package.description.clone(),
            latest_version: package.latest_version().map(str::to_string),
            created_date: package.latest_release_date().map(str::to_string),
            ..Self::with_repository(resolved)
        }
    }

    fn with_repository(resolved: &ResolvedRepository) -> Self {
        let repo = resolved.repo.as_ref();
        Self {
            repository_url: resolved.url.clone(),
            repository_platform: repo.map(crate::repo::RepoRef::platform),
            repository_org: repo.map(|r| r.organization().to_string()),
            repository_name: repo.map(|r| r.repository().to_string()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NpmRepository;
    use crate::repo::{RepoRef, resolve_npm};
    use std::collections::HashMap;

    #[test]
    fn test_from_npm() {
        let package = NpmPackage {
            description: Some("Fast, unopinionated, minimalist web framework".to_string()),
            dist_tags: HashMap::from([("latest".to_string(), "4.18.2".to_string())]),
            time: HashMap::from([("4.18.2".to_string(), serde_json::json!("2022-10-08T20:23:45.125Z"))]),
            repository: Some(NpmRepository::Detailed {
                url: Some("git+https://github.com/expressjs/express.git".to_string()),
            }),
        };

        let resolved = resolve_npm(package.repository.as_ref());
        let info = PackageInfo::from_npm(&package, &resolved);

        assert_eq!(info.summary.as_deref(), Some("Fast, unopinionated, minimalist web framework"));
        assert_eq!(info.latest_version.as_deref(), Some("4.18.2"));
        assert_eq!(info.created_date.as_deref(), Some("2022-10-08T20:23:45.125Z"));
        assert_eq!(info.repository_url.as_deref(), Some("git+https://github.com/expressjs/express.git"));
        assert_eq!(info.repository_platform, Some(Platform::GitHub));
        assert_eq!(info.repository_org.as_deref(), Some("expressjs"));
        assert_eq!(info.repository_name.as_deref(), Some("express"));
    }

    #[test]
    fn test_unresolved_repository() {
        let resolved = ResolvedRepository {
            url: Some("https://git.company.com/team/lib".to_string()),
            repo: None,
        };

        let info = PackageInfo::from_pypi(&PypiPackage::default(), &resolved);
        assert_eq!(info.repository_url.as_deref(), Some("https://git.company.com/team/lib"));
        assert_eq!(info.repository_platform, None);
        assert_eq!(info.repository_org, None);
        assert_eq!(info.repository_name, None);
    }

    #[test]
    fn test_with_repository_identity() {
        let resolved = ResolvedRepository {
            url: Some("https://gitlab.com/group/project".to_string()),
            repo: Some(RepoRef::new(Platform::GitLab, "group", "project")),
        };

        let value = serde_json::to_value(PackageInfo::from_pypi(&PypiPackage::default(), &resolved)).unwrap();
        assert_eq!(value["repository_platform"], "gitlab");
        assert_eq!(value["repository_org"], "group");
        assert!(value["summary"].is_null());
    }
}
