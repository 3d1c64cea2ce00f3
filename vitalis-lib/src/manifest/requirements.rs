use super::{Dependency, DependencySource};
use regex::Regex;
use std::sync::LazyLock;

static REQUIREMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^=<>~!]+)([=<>~!]+)(.+)").expect("invalid regex"));

/// Parse a pip `requirements.txt`.
///
/// Blank lines and comments are skipped. Anything before the first run of comparison
/// characters is the name and everything after it is the version.
pub fn parse(content: &str) -> Vec<Dependency> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match REQUIREMENT_REGEX.captures(line) {
            Some(caps) => Dependency::new(caps[1].trim(), Some(caps[3].trim().to_string()), DependencySource::PyPi, line),
            None => Dependency::new(line, None, DependencySource::PyPi, line),
        })
        .collect()
}
