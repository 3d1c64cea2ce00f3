//! Per-dependency orchestration.
//!
//! For each dependency the [`Analyzer`] fetches registry metadata, resolves the source
//! repository, and, when the repository lives on a supported platform, evaluates its
//! health. Every dependency yields a [`DependencyReport`], including those that fail.

mod analyzer;
mod dependency_report;
mod package_info;

pub use analyzer::{Analyzer, DEFAULT_MAX_CONCURRENT_DEPENDENCIES};
pub use dependency_report::{DependencyReport, NO_SUPPORTED_REPOSITORY, Verdict};
pub use package_info::PackageInfo;
