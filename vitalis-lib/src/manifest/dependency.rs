use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The ecosystem a dependency was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum DependencySource {
    #[serde(rename = "pypi")]
    #[strum(serialize = "pypi")]
    PyPi,

    #[serde(rename = "npm")]
    #[strum(serialize = "npm")]
    Npm,

    #[serde(rename = "poetry")]
    #[strum(serialize = "poetry")]
    Poetry,

    #[serde(rename = "poetry.lock")]
    #[strum(serialize = "poetry.lock")]
    PoetryLock,

    #[serde(rename = "conda")]
    #[strum(serialize = "conda")]
    Conda,

    #[serde(rename = "pip")]
    #[strum(serialize = "pip")]
    Pip,
}

impl DependencySource {
    /// The registry that holds metadata for dependencies from this source.
    ///
    /// Conda packages are looked up on PyPI, which has most but not all of them.
    #[must_use]
    pub const fn registry(self) -> Registry {
        match self {
            Self::PyPi | Self::Poetry | Self::PoetryLock | Self::Conda | Self::Pip => Registry::PyPi,
            Self::Npm => Registry::Npm,
        }
    }
}

/// A single dependency declared in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: Option<String>,
    pub source: DependencySource,

    /// The manifest text this dependency was read from.
    pub raw: Option<String>,
}

impl Dependency {
    #[must_use]
    pub fn new(name: impl Into<String>, version: Option<String>, source: DependencySource, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version,
            source,
            raw: Some(raw.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn test_source_names() {
        assert_eq!(DependencySource::PoetryLock.to_string(), "poetry.lock");
        assert_eq!(DependencySource::from_str("conda").unwrap(), DependencySource::Conda);
        assert_eq!(serde_json::to_value(DependencySource::PyPi).unwrap(), "pypi");
    }

    #[test]
    fn test_source_registry() {
        assert_eq!(DependencySource::Conda.registry(), Registry::PyPi);
        assert_eq!(DependencySource::Pip.registry(), Registry::PyPi);
        assert_eq!(DependencySource::Npm.registry(), Registry::Npm);
    }
}
