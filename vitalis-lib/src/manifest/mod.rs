//! Dependency extraction from manifest files.

mod dependency;
mod environment;
mod manifest_kind;
mod package_json;
mod poetry_lock;
mod pyproject;
mod requirements;

pub use dependency::{Dependency, DependencySource};
pub use manifest_kind::ManifestKind;

use crate::Result;

/// Extract the dependencies declared in a manifest, in declaration order.
pub fn parse_manifest(kind: ManifestKind, content: &str) -> Result<Vec<Dependency>> {
    match kind {
        ManifestKind::RequirementsTxt => Ok(requirements::parse(content)),
        ManifestKind::PackageJson => package_json::parse(content),
        ManifestKind::PyprojectToml => pyproject::parse(content),
        ManifestKind::EnvironmentYml => environment::parse(content),
        ManifestKind::PoetryLock => Ok(poetry_lock::parse(content)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest_dispatch() {
        let deps = parse_manifest(ManifestKind::RequirementsTxt, "requests==2.31.0\n").unwrap();
        assert_eq!(deps[0].source, DependencySource::PyPi);

        let deps = parse_manifest(ManifestKind::PackageJson, r#"{"dependencies": {"lodash": "4.17.21"}}"#).unwrap();
        assert_eq!(deps[0].source, DependencySource::Npm);

        let deps = parse_manifest(ManifestKind::EnvironmentYml, "dependencies:\n  - numpy\n").unwrap();
        assert_eq!(deps[0].source, DependencySource::Conda);
    }

    #[test]
    fn test_parse_manifest_malformed() {
        let _ = parse_manifest(ManifestKind::PackageJson, "not json").unwrap_err();
        let _ = parse_manifest(ManifestKind::PyprojectToml, "= broken").unwrap_err();
    }
}
