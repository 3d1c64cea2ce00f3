//! Repository URL resolution
//!
//! Package registries describe where a project's source lives in free-form metadata.
//! This module turns that metadata into a [`RepoRef`]: a hosting [`Platform`] together
//! with the owning organization and repository name.
//!
//! Only the three public hosting services vitalis knows how to query are recognized.
//! A URL pointing anywhere else (including self-hosted or enterprise instances) simply
//! does not resolve, which callers treat as "no health check possible".

mod platform;
mod repo_ref;
mod resolver;

pub use platform::Platform;
pub use repo_ref::RepoRef;
pub use resolver::{RegistryMetadata, ResolvedRepository, resolve_from_registry_metadata, resolve_npm, resolve_pypi};
