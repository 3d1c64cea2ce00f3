//! Repository health evaluation.
//!
//! A [`HealthEvaluator`] queries a hosting platform's REST API for a single repository
//! and condenses what it finds into a [`HealthCheckResult`] judged against a [`Policy`].
//! Failures talking to the platform never escape the evaluator: they are recorded in the
//! result and mark the repository unhealthy.

mod client;
mod doc_files;
mod evaluator;
mod github;
mod gitlab;
mod health_check_result;
mod policy;
mod timestamp;

pub use doc_files::{LICENSE_FILES, README_FILES};
pub use evaluator::{EvaluatorSettings, HealthEvaluator};
pub use github::DEFAULT_GITHUB_API_URL;
pub use gitlab::DEFAULT_GITLAB_API_URL;
pub use health_check_result::{HealthAccumulator, HealthCheckResult};
pub use policy::Policy;
pub use timestamp::{days_since, parse_timestamp};

const LOG_TARGET: &str = "    health";
