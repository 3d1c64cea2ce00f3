#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for vitalis
//!
//! This library consolidates all functionality for the vitalis tool, which takes a
//! dependency manifest, finds the source repository behind every dependency, and
//! evaluates each repository's health against a policy.
//!
//! # Module Organization
//!
//! - [`manifest`]: Dependency extraction from manifest files
//! - [`registry`]: PyPI and npm metadata retrieval
//! - [`repo`]: Repository URL resolution
//! - [`health`]: Repository health evaluation
//! - [`analysis`]: Per-dependency orchestration
//! - [`reports`]: Report generation
//! - [`commands`]: Command-line interface

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod analysis;
pub mod commands;
pub mod health;
mod http;
pub mod manifest;
pub mod registry;
pub mod reports;
pub mod repo;

pub use crate::commands::{Host, run};
