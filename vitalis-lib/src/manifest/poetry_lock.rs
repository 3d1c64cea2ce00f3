use super::{Dependency, DependencySource};

const PACKAGE_HEADER: &str = "\n[[package]]\n";

/// Parse a `poetry.lock`, keeping only packages in the `main` category.
///
/// Each `[[package]]` block is scanned line by line for its `name`, `version`, and
/// `category` keys. Lock files written without categories yield no dependencies.
pub fn parse(content: &str) -> Vec<Dependency> {
    content.split(PACKAGE_HEADER).filter_map(parse_block).collect()
}

fn parse_block(block: &str) -> Option<Dependency> {
    let block = block.trim();

    let mut name = None;
    let mut version = None;
    let mut category = None;
    for line in block.lines() {
        if line.starts_with("name = ") {
            name = quoted_value(line);
        } else if line.starts_with("version = ") {
            version = quoted_value(line);
        } else if line.starts_with("category = ") {
            category = quoted_value(line);
        }
    }

    let name = name.filter(|n| !n.is_empty())?;
    (category.as_deref() == Some("main")).then(|| Dependency::new(name, version, DependencySource::PoetryLock, block))
}

fn quoted_value(line: &str) -> Option<String> {
    line.split_once('=').map(|(_, value)| value.trim().trim_matches('"').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCK: &str = r#"# This file is automatically @generated by Poetry.

[[package]]
name = "certifi"
version = "2023.7.22"
description = "Python package for providing Mozilla's CA Bundle."
category = "main"
optional = false

[[package]]
name = "pytest"
version = "7.4.0"
category = "dev"
optional = false

[[package]]
name = "urllib3"
version = "2.0.4"
category = "main"
optional = false

[package.extras]
brotli = ["brotli (>=1.0.9)"]
"#;

    #[test]
    fn test_parse_main_packages() {
        let deps = parse(LOCK);
        assert_eq!(deps.len(), 2);

        assert_eq!(deps[0].name, "certifi");
        assert_eq!(deps[0].version.as_deref(), Some("2023.7.22"));
        assert_eq!(deps[0].source, DependencySource::PoetryLock);
        assert!(deps[0].raw.as_deref().unwrap().starts_with("name = \"certifi\""));

        assert_eq!(deps[1].name, "urllib3");
        assert_eq!(deps[1].version.as_deref(), Some("2.0.4"));
    }

    #[test]
    fn test_parse_without_categories() {
        let content = "\n[[package]]\nname = \"six\"\nversion = \"1.16.0\"\n";
        assert!(parse(content).is_empty());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
    }
}
