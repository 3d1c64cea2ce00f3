//! Report generation for analysis results
//!
//! Two generators are provided, each accessed through a `generate` function that writes
//! to any [`core::fmt::Write`]:
//! - **Console**: human-readable blocks, one per dependency, with optional ANSI colors
//!   and a closing summary line
//! - **JSON**: `{"results": [...]}`, one entry per dependency

mod console;
mod json;
mod summary;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
pub use summary::Summary;
