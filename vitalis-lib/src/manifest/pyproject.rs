use super::{Dependency, DependencySource};
use crate::Result;
use indexmap::IndexMap;
use ohno::IntoAppError;
use serde::Deserialize;
use toml::Value;

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: Tool,
}

#[derive(Debug, Default, Deserialize)]
struct Tool {
    #[serde(default)]
    poetry: Poetry,
}

#[derive(Debug, Default, Deserialize)]
struct Poetry {
    #[serde(default)]
    dependencies: IndexMap<String, Value>,
}

/// Parse the `[tool.poetry.dependencies]` table of a `pyproject.toml`.
///
/// The `python` entry constrains the interpreter rather than naming a package and is skipped.
pub fn parse(content: &str) -> Result<Vec<Dependency>> {
    let project: PyProject = toml::from_str(content).into_app_err("invalid pyproject.toml")?;

    Ok(project
        .tool
        .poetry
        .dependencies
        .into_iter()
        .filter(|(name, _)| !name.eq_ignore_ascii_case("python"))
        .map(|(name, spec)| {
            let version = match spec {
                Value::String(s) => Some(s),
                Value::Table(table) => table.get("version").and_then(Value::as_str).map(str::to_string),
                _ => None,
            };
            let raw = format!("{name}: {}", version.as_deref().unwrap_or("None"));
            Dependency::new(name, version, DependencySource::Poetry, raw)
        })
        .collect())
}
