use crate::analysis::{DependencyReport, Verdict};

/// Number of dependencies per verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub healthy: usize,
    pub unhealthy: usize,
    pub unchecked: usize,
}

impl Summary {
    #[must_use]
    pub fn of(reports: &[DependencyReport]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            match report.verdict() {
                Verdict::Healthy => summary.healthy += 1,
                Verdict::Unhealthy => summary.unhealthy += 1,
                Verdict::Unchecked => summary.unchecked += 1,
            }
            summary
        })
    }
}
