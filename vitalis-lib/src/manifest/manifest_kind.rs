use crate::Result;
use clap::ValueEnum;
use ohno::bail;
use strum::Display;

/// The manifest formats vitalis can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, ValueEnum)]
pub enum ManifestKind {
    #[value(name = "requirements.txt")]
    #[strum(serialize = "requirements.txt")]
    RequirementsTxt,

    #[value(name = "package.json")]
    #[strum(serialize = "package.json")]
    PackageJson,

    #[value(name = "pyproject.toml")]
    #[strum(serialize = "pyproject.toml")]
    PyprojectToml,

    #[value(name = "environment.yml")]
    #[strum(serialize = "environment.yml")]
    EnvironmentYml,

    #[value(name = "poetry.lock")]
    #[strum(serialize = "poetry.lock")]
    PoetryLock,
}

/// File name suffixes and the manifest kind each one denotes.
const FILE_NAME_SUFFIXES: &[(&str, ManifestKind)] = &[
    ("requirements.txt", ManifestKind::RequirementsTxt),
    ("package.json", ManifestKind::PackageJson),
    ("pyproject.toml", ManifestKind::PyprojectToml),
    ("environment.yml", ManifestKind::EnvironmentYml),
    ("environment.yaml", ManifestKind::EnvironmentYml),
    ("poetry.lock", ManifestKind::PoetryLock),
];

impl ManifestKind {
    /// Infer the manifest kind from a file name, ignoring case.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let lower = file_name.to_lowercase();
        for (suffix, kind) in FILE_NAME_SUFFIXES {
            if lower.ends_with(suffix) {
                return Ok(*kind);
            }
        }

        bail!("could not infer manifest type from file name '{file_name}'")
    }
}
