use super::{DependencyReport, PackageInfo};
use crate::health::{HealthEvaluator, Policy};
use crate::manifest::{Dependency, DependencySource};
use crate::registry::{NpmPackage, PypiPackage, Registry, RegistryClient};
use crate::repo::{RegistryMetadata, resolve_from_registry_metadata};
use futures::stream::{self, StreamExt};

const LOG_TARGET: &str = "  analyzer";

/// Default number of dependencies analyzed at the same time.
pub const DEFAULT_MAX_CONCURRENT_DEPENDENCIES: usize = 4;

/// Takes each dependency from registry metadata through repository resolution to a health verdict.
#[derive(Debug, Clone)]
pub struct Analyzer {
    registry: RegistryClient,
    evaluator: HealthEvaluator,
    max_concurrent_dependencies: usize,
}

impl Analyzer {
    #[must_use]
    pub fn new(registry: RegistryClient, evaluator: HealthEvaluator, max_concurrent_dependencies: usize) -> Self {
        Self {
            registry,
            evaluator,
            max_concurrent_dependencies: max_concurrent_dependencies.max(1),
        }
    }

    /// Analyze every dependency, returning one report per dependency in the order given.
    pub async fn analyze(&self, dependencies: &[Dependency], policy: &Policy) -> Vec<DependencyReport> {
        log::info!(target: LOG_TARGET, "Analyzing {} dependencies", dependencies.len());

        stream::iter(dependencies)
            .map(|dep| self.analyze_dependency(dep, policy))
            .buffered(self.max_concurrent_dependencies)
            .collect()
            .await
    }

    pub async fn analyze_dependency(&self, dep: &Dependency, policy: &Policy) -> DependencyReport {
        let registry = dep.source.registry();
        let fetched = match registry {
            Registry::PyPi => self.registry.fetch_pypi(&dep.name).await.map(|r| r.found().map(Fetched::PyPi)),
            Registry::Npm => self.registry.fetch_npm(&dep.name).await.map(|r| r.found().map(Fetched::Npm)),
        };

        let package = match fetched {
            Ok(Some(package)) => package,
            Ok(None) => return DependencyReport::failed(&dep.name, fetch_failure_message(dep, registry)),
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Skipping dependency '{}': {e:#}", dep.name);
                return DependencyReport::failed(&dep.name, e.to_string());
            }
        };

        let (package_info, resolved) = match &package {
            Fetched::PyPi(pkg) => {
                let resolved = resolve_from_registry_metadata(RegistryMetadata::PyPi(&pkg.info));
                (PackageInfo::from_pypi(pkg, &resolved), resolved)
            }
            Fetched::Npm(pkg) => {
                let resolved = resolve_from_registry_metadata(RegistryMetadata::Npm(pkg));
                (PackageInfo::from_npm(pkg, &resolved), resolved)
            }
        };

        let Some(repo) = resolved.repo else {
            log::debug!(target: LOG_TARGET, "No repository found for dependency '{}'", dep.name);
            return DependencyReport::unevaluated(&dep.name, package_info);
        };

        match self.evaluator.evaluate(&repo, policy).await {
            Some(health) => DependencyReport::evaluated(&dep.name, package_info, health),
            None => DependencyReport::unevaluated(&dep.name, package_info),
        }
    }
}

/// Registry metadata for a package that exists.
enum Fetched {
    PyPi(PypiPackage),
    Npm(NpmPackage),
}

fn fetch_failure_message(dep: &Dependency, registry: Registry) -> String {
    let message = format!("Could not fetch info for {} from {}", dep.name, registry.display_name());
    if dep.source == DependencySource::Conda {
        format!("{message}. This may be a conda-only or system package.")
    } else {
        message
    }
}
