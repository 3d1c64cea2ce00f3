//! Command-line interface and orchestration for vitalis
//!
//! This module implements the CLI commands and coordinates the rest of the library
//! to take a manifest all the way to a health report.
//!
//! ## Commands
//!
//! - **extract**: Parse a manifest and print its dependencies as JSON
//! - **analyze**: Parse a manifest, resolve and evaluate every dependency's repository,
//!   and generate console and JSON reports
//! - **check**: Evaluate a single repository URL and print the result as JSON
//! - **init**: Generate a default configuration file
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap, initializes logging,
//! and routes to the appropriate command handler. All output goes through a [`Host`]
//! so commands can be driven from tests.
//!
//! Configuration is read from `vitalis.toml` (or `--config`), and policy fields can be
//! overridden per invocation.

mod analyze;
mod check;
mod common;
mod config;
mod extract;
mod host;
mod init;
mod run;

pub use analyze::{AnalyzeArgs, analyze_manifest};
pub use check::{CheckArgs, check_repository};
pub use common::{ColorMode, LogLevel, PolicyArgs, TokenArgs};
pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML};
pub use extract::{ExtractArgs, extract_dependencies};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
