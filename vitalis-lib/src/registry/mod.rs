//! Package registry metadata retrieval
//!
//! Fetches the metadata PyPI and npm publish for a package. The metadata is consumed by
//! the [`crate::repo`] resolver to locate the package's source repository and by the
//! analyzer to describe the package (summary, latest version, release date).
//!
//! Package names are validated before any request is made: only ASCII letters, digits,
//! dashes, and underscores are accepted.

mod client;
mod npm;
mod provider_result;
mod pypi;
mod registry_kind;

pub use client::{DEFAULT_NPM_URL, DEFAULT_PYPI_URL, RegistryClient, validate_package_name};
pub use npm::{NpmPackage, NpmRepository};
pub use provider_result::ProviderResult;
pub use pypi::{PypiInfo, PypiPackage, PypiRelease};
pub use registry_kind::Registry;
