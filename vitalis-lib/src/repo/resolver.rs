use super::RepoRef;
use crate::registry::{NpmPackage, NpmRepository, PypiInfo};
use indexmap::IndexMap;

/// Labels that name the source repository outright.
const SOURCE_LABELS: &[&str] = &["Source", "Repository", "Code"];

/// Labels that often, but not always, point at the repository.
const HOMEPAGE_LABELS: &[&str] = &["Homepage"];

/// Labels that never point at the source repository, even when the URL is on a hosting platform.
const EXCLUDED_LABELS: &[&str] = &["Funding", "Sponsor", "Donate", "Bug Tracker", "Issue Tracker", "Documentation"];

/// Registry metadata from which a repository can be resolved.
#[derive(Debug, Clone, Copy)]
pub enum RegistryMetadata<'a> {
    PyPi(&'a PypiInfo),
    Npm(&'a NpmPackage),
}

/// The repository URL found in registry metadata and what it resolved to.
///
/// `url` can be present while `repo` is not: an npm package can declare a repository
/// on a host vitalis does not recognize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRepository {
    pub url: Option<String>,
    pub repo: Option<RepoRef>,
}

impl ResolvedRepository {
    const fn unresolved() -> Self {
        Self { url: None, repo: None }
    }
}

/// Locate the source repository described by a registry's metadata.
#[must_use]
pub fn resolve_from_registry_metadata(metadata: RegistryMetadata<'_>) -> ResolvedRepository {
    match metadata {
        RegistryMetadata::PyPi(info) => resolve_pypi(info.project_urls.as_ref()),
        RegistryMetadata::Npm(package) => resolve_npm(package.repository.as_ref()),
    }
}

/// Resolve a PyPI `project_urls` mapping.
///
/// Labels are tried in three tiers: explicit source labels, then `Homepage`, then any
/// label that is not known to point elsewhere. Within a tier the mapping's order is
/// kept. The first URL that resolves to a known platform wins; a URL that does not
/// resolve never stops the search.
#[must_use]
pub fn resolve_pypi(project_urls: Option<&IndexMap<String, String>>) -> ResolvedRepository {
    let Some(project_urls) = project_urls else {
        return ResolvedRepository::unresolved();
    };

    let tiers: [fn(&str) -> bool; 3] = [
        |label| SOURCE_LABELS.contains(&label),
        |label| HOMEPAGE_LABELS.contains(&label),
        |label| !EXCLUDED_LABELS.contains(&label),
    ];

    tiers
        .iter()
        .find_map(|in_tier| {
            project_urls
                .iter()
                .filter(|(label, _)| in_tier(label))
                .find_map(|(_, url)| {
                    RepoRef::parse(url).map(|repo| ResolvedRepository {
                        url: Some(url.clone()),
                        repo: Some(repo),
                    })
                })
        })
        .unwrap_or_else(ResolvedRepository::unresolved)
}

/// Resolve an npm `repository` field.
#[must_use]
pub fn resolve_npm(repository: Option<&NpmRepository>) -> ResolvedRepository {
    let Some(url) = repository.and_then(NpmRepository::url).filter(|url| !url.is_empty()) else {
        return ResolvedRepository::unresolved();
    };

    ResolvedRepository {
        url: Some(url.to_string()),
        repo: RepoRef::parse(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::Platform;

    fn urls(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs.iter().map(|(label, url)| ((*label).to_string(), (*url).to_string())).collect()
    }

    #[test]
    fn test_source_label() {
        let project_urls = urls(&[("Source", "https://github.com/psf/requests")]);

        let resolved = resolve_pypi(Some(&project_urls));
        assert_eq!(resolved.url.as_deref(), Some("https://github.com/psf/requests"));

        let repo = resolved.repo.unwrap();
        assert_eq!(repo.platform(), Platform::GitHub);
        assert_eq!(repo.organization(), "psf");
        assert_eq!(repo.repository(), "requests");
    }

    #[test]
    fn test_source_tier_beats_homepage_regardless_of_order() {
        let project_urls = urls(&[
            ("Homepage", "https://gitlab.com/other/project"),
            ("Source", "https://github.com/psf/requests"),
        ]);

        let resolved = resolve_pypi(Some(&project_urls));
        assert_eq!(resolved.url.as_deref(), Some("https://github.com/psf/requests"));
    }

    #[test]
    fn test_unresolvable_homepage_does_not_block_source() {
        let project_urls = urls(&[
            ("Homepage", "https://requests.readthedocs.io"),
            ("Source", "https://github.com/psf/requests"),
        ]);

        let resolved = resolve_pypi(Some(&project_urls));
        assert_eq!(resolved.repo.unwrap().repository(), "requests");
    }

    #[test]
    fn test_unresolvable_source_falls_through_to_homepage() {
        let project_urls = urls(&[
            ("Source", "https://git.company.com/team/lib"),
            ("Homepage", "https://github.com/team/lib"),
        ]);

        let resolved = resolve_pypi(Some(&project_urls));
        assert_eq!(resolved.url.as_deref(), Some("https://github.com/team/lib"));
    }

    #[test]
    fn test_first_match_within_tier_wins() {
        let project_urls = urls(&[
            ("Repository", "https://gitlab.com/first/one"),
            ("Code", "https://github.com/second/two"),
        ]);

        let repo = resolve_pypi(Some(&project_urls)).repo.unwrap();
        assert_eq!(repo.platform(), Platform::GitLab);
        assert_eq!(repo.organization(), "first");
    }

    #[test]
    fn test_homepage_tier() {
        let project_urls = urls(&[
            ("Documentation", "https://docs.example.com"),
            ("Homepage", "https://github.com/user/repo"),
            ("Bug Tracker", "https://github.com/user/repo/issues"),
        ]);

        let resolved = resolve_pypi(Some(&project_urls));
        assert_eq!(resolved.url.as_deref(), Some("https://github.com/user/repo"));
    }

    #[test]
    fn test_fallback_tier_skips_excluded_labels() {
        let project_urls = urls(&[
            ("Documentation", "https://docs.example.com"),
            ("Bug Tracker", "https://github.com/user/repo/issues"),
            ("Funding", "https://sponsor.example.com"),
            ("Custom", "https://github.com/user/repo"),
        ]);

        let resolved = resolve_pypi(Some(&project_urls));
        assert_eq!(resolved.url.as_deref(), Some("https://github.com/user/repo"));
    }

    #[test]
    fn test_excluded_label_only() {
        let project_urls = urls(&[("Funding", "https://github.com/sponsors/user")]);

        assert_eq!(resolve_pypi(Some(&project_urls)), ResolvedRepository::default());
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        // "source" is not a tier-1 label, but tier 3 still accepts it.
        let project_urls = urls(&[
            ("source", "https://github.com/lower/case"),
            ("Homepage", "https://github.com/home/page"),
        ]);

        let resolved = resolve_pypi(Some(&project_urls));
        assert_eq!(resolved.url.as_deref(), Some("https://github.com/home/page"));
    }

    #[test]
    fn test_no_project_urls() {
        assert_eq!(resolve_pypi(None), ResolvedRepository::default());
        assert_eq!(resolve_pypi(Some(&IndexMap::new())), ResolvedRepository::default());
    }

    #[test]
    fn test_npm_repository_url() {
        let repository = NpmRepository::Detailed {
            url: Some("git+https://github.com/expressjs/express.git".to_string()),
        };

        let resolved = resolve_npm(Some(&repository));
        assert_eq!(resolved.url.as_deref(), Some("git+https://github.com/expressjs/express.git"));

        let repo = resolved.repo.unwrap();
        assert_eq!(repo.organization(), "expressjs");
        assert_eq!(repo.repository(), "express");
    }

    #[test]
    fn test_npm_unrecognized_host_keeps_url() {
        let repository = NpmRepository::Detailed {
            url: Some("https://git.company.com/team/lib.git".to_string()),
        };

        let resolved = resolve_npm(Some(&repository));
        assert_eq!(resolved.url.as_deref(), Some("https://git.company.com/team/lib.git"));
        assert!(resolved.repo.is_none());
    }

    #[test]
    fn test_npm_missing_repository() {
        assert_eq!(resolve_npm(None), ResolvedRepository::default());
        assert_eq!(resolve_npm(Some(&NpmRepository::Detailed { url: None })), ResolvedRepository::default());
    }

    #[test]
    fn test_resolve_from_registry_metadata_dispatch() {
        let info = PypiInfo {
            project_urls: Some(urls(&[("Source", "https://github.com/psf/requests")])),
            ..PypiInfo::default()
        };
        let resolved = resolve_from_registry_metadata(RegistryMetadata::PyPi(&info));
        assert_eq!(resolved.repo.unwrap().repository(), "requests");

        let package = NpmPackage {
            repository: Some(NpmRepository::Shorthand("https://gitlab.com/group/project".to_string())),
            ..NpmPackage::default()
        };
        let resolved = resolve_from_registry_metadata(RegistryMetadata::Npm(&package));
        assert_eq!(resolved.repo.unwrap().platform(), Platform::GitLab);
    }
}
