use serde::{Deserialize, Serialize};

const fn default_max_inactive_days() -> u32 {
    365
}

const fn default_true() -> bool {
    true
}

/// Thresholds and requirements a repository must meet to be considered healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Policy {
    /// Days without activity after which a repository is unhealthy.
    #[serde(default = "default_max_inactive_days")]
    pub max_inactive_days: u32,

    /// Whether a LICENSE or COPYING file must be present in the repository root.
    #[serde(default = "default_true")]
    pub require_license: bool,

    /// Whether a README file must be present in the repository root.
    #[serde(default = "default_true")]
    pub require_readme: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            max_inactive_days: default_max_inactive_days(),
            require_license: default_true(),
            require_readme: default_true(),
        }
    }
}
