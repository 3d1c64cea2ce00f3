use super::{Dependency, DependencySource};
use crate::Result;
use indexmap::IndexMap;
use ohno::IntoAppError;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: IndexMap<String, Value>,

    #[serde(default, rename = "devDependencies")]
    dev_dependencies: IndexMap<String, Value>,
}

/// Parse an npm `package.json`, runtime dependencies first, then development dependencies.
pub fn parse(content: &str) -> Result<Vec<Dependency>> {
    let package: PackageJson = serde_json::from_str(content).into_app_err("invalid package.json")?;

    Ok(package
        .dependencies
        .iter()
        .chain(&package.dev_dependencies)
        .map(|(name, version)| {
            let version = match version {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let raw = format!("{name}: {version}");
            Dependency::new(name, Some(version), DependencySource::Npm, raw)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_package_json() {
        let content = r#"{
            "name": "my-app",
            "dependencies": {
                "react": "^18.2.0",
                "express": "4.18.2"
            },
            "devDependencies": {
                "jest": "^29.0.0"
            }
        }"#;

        let deps = parse(content).unwrap();
        let names: Vec<_> = deps.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["react", "express", "jest"]);

        assert_eq!(deps[0].version.as_deref(), Some("^18.2.0"));
        assert_eq!(deps[0].source, DependencySource::Npm);
        assert_eq!(deps[0].raw.as_deref(), Some("react: ^18.2.0"));
    }

    #[test]
    fn test_parse_without_dependencies() {
        assert!(parse(r#"{"name": "empty"}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        let _ = parse("{ not json").unwrap_err();
    }
}
