/// File names recognized as a README, in probing order.
pub const README_FILES: &[&str] = &[
    "README.md",
    "README.rst",
    "README.txt",
    "README",
    "README.markdown",
    "README.mdown",
    "README.mkdn",
];

/// File names recognized as a license, in probing order.
pub const LICENSE_FILES: &[&str] = &[
    "LICENSE",
    "LICENSE.md",
    "LICENSE.txt",
    "LICENSE.markdown",
    "LICENSE.mdown",
    "LICENSE.mkdn",
    "COPYING",
    "COPYING.md",
    "COPYING.txt",
    "COPYING.markdown",
    "COPYING.mdown",
    "COPYING.mkdn",
];

#[must_use]
pub fn is_readme(file_name: &str) -> bool {
    README_FILES.iter().any(|name| name.eq_ignore_ascii_case(file_name))
}

#[must_use]
pub fn is_license(file_name: &str) -> bool {
    LICENSE_FILES.iter().any(|name| name.eq_ignore_ascii_case(file_name))
}
