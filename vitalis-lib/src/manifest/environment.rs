use super::{Dependency, DependencySource};
use crate::Result;
use ohno::IntoAppError;
use serde::Deserialize;
use serde_yaml::Value;

#[derive(Debug, Deserialize)]
struct Environment {
    #[serde(default)]
    dependencies: Vec<Value>,
}

/// Parse a conda `environment.yml`.
///
/// Plain entries are conda packages (`name=version`); entries of a nested `pip:` list
/// are pip packages (`name==version`).
pub fn parse(content: &str) -> Result<Vec<Dependency>> {
    let env: Environment = serde_yaml::from_str(content).into_app_err("invalid environment.yml")?;

    let mut deps = Vec::new();
    for entry in &env.dependencies {
        match entry {
            Value::String(spec) => deps.push(conda_dependency(spec)),
            Value::Mapping(mapping) => {
                if let Some(Value::Sequence(pip_specs)) = mapping.get("pip") {
                    deps.extend(pip_specs.iter().filter_map(Value::as_str).map(pip_dependency));
                }
            }
            _ => {}
        }
    }

    Ok(deps)
}

fn conda_dependency(spec: &str) -> Dependency {
    let (name, version) = match spec.split_once('=') {
        Some((name, version)) => (name, Some(version.to_string())),
        None => (spec, None),
    };

    Dependency::new(name.trim(), version, DependencySource::Conda, spec)
}

fn pip_dependency(spec: &str) -> Dependency {
    let mut parts = spec.split("==");
    let name = parts.next().unwrap_or(spec);
    let version = parts.next().map(str::to_string);

    Dependency::new(name.trim(), version, DependencySource::Pip, spec)
}
