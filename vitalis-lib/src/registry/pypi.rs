use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;

/// The subset of PyPI's JSON API response (`/pypi/{name}/json`) that vitalis uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PypiPackage {
    #[serde(default)]
    pub info: PypiInfo,

    #[serde(default)]
    pub releases: HashMap<String, Vec<PypiRelease>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PypiInfo {
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// Labeled project URLs, in the order the project declared them.
    #[serde(default)]
    pub project_urls: Option<IndexMap<String, String>>,
}

/// A single distribution file of a release.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PypiRelease {
    #[serde(default)]
    pub upload_time_iso_8601: Option<String>,
}

impl PypiPackage {
    /// Upload time of the first file of the latest release.
    #[must_use]
    pub fn latest_release_date(&self) -> Option<&str> {
        let version = self.info.version.as_deref()?;
        self.releases.get(version)?.first()?.upload_time_iso_8601.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "info": {
                "summary": "Python HTTP for Humans.",
                "version": "2.31.0",
                "project_urls": {
                    "Documentation": "https://requests.readthedocs.io",
                    "Source": "https://github.com/psf/requests"
                }
            },
            "releases": {
                "2.31.0": [{"upload_time_iso_8601": "2023-05-22T15:12:42.313790Z"}]
            }
        }"#;

        let package: PypiPackage = serde_json::from_str(json).unwrap();
        assert_eq!(package.info.summary.as_deref(), Some("Python HTTP for Humans."));
        assert_eq!(package.info.version.as_deref(), Some("2.31.0"));

        let labels: Vec<_> = package.info.project_urls.as_ref().unwrap().keys().map(String::as_str).collect();
        assert_eq!(labels, ["Documentation", "Source"]);
        assert_eq!(package.latest_release_date(), Some("2023-05-22T15:12:42.313790Z"));
    }

    #[test]
    fn test_deserialize_null_project_urls() {
        let json = r#"{"info": {"summary": null, "version": "1.0", "project_urls": null}}"#;

        let package: PypiPackage = serde_json::from_str(json).unwrap();
        assert!(package.info.project_urls.is_none());
        assert!(package.info.summary.is_none());
    }

    #[test]
    fn test_latest_release_date_missing_info() {
        let package = PypiPackage::default();
        assert_eq!(package.latest_release_date(), None);
    }

    #[test]
    fn test_latest_release_date_version_not_in_releases() {
        let json = r#"{
            "info": {"version": "2.0.0"},
            "releases": {"1.0.0": [{"upload_time_iso_8601": "2021-01-01T12:00:00Z"}]}
        }"#;

        let package: PypiPackage = serde_json::from_str(json).unwrap();
        assert_eq!(package.latest_release_date(), None);
    }

    #[test]
    fn test_latest_release_date_empty_file_list() {
        let json = r#"{"info": {"version": "1.0.0"}, "releases": {"1.0.0": []}}"#;

        let package: PypiPackage = serde_json::from_str(json).unwrap();
        assert_eq!(package.latest_release_date(), None);
    }
}
