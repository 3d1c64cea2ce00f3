use super::Summary;
use crate::Result;
use crate::analysis::{DependencyReport, Verdict};
use crate::health::HealthCheckResult;
use core::fmt::Write;
use owo_colors::OwoColorize;

const FIELD_WIDTH: usize = 13;

pub fn generate<W: Write>(reports: &[DependencyReport], use_colors: bool, writer: &mut W) -> Result<()> {
    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
            writeln!(writer, "═══════════════════════════════════════")?;
            writeln!(writer)?;
        }

        let verdict = report.verdict();
        let status_str = match verdict {
            Verdict::Healthy => "HEALTHY",
            Verdict::Unhealthy => "UNHEALTHY",
            Verdict::Unchecked => "NOT CHECKED",
        };

        let colored_status = if use_colors {
            match verdict {
                Verdict::Healthy => status_str.green().bold().to_string(),
                Verdict::Unhealthy => status_str.red().bold().to_string(),
                Verdict::Unchecked => status_str.yellow().bold().to_string(),
            }
        } else {
            status_str.to_string()
        };

        writeln!(writer, "{} is {colored_status}", report.dependency)?;

        if let Some(info) = &report.package_info {
            write_field(writer, "version", info.latest_version.as_deref())?;
            write_field(writer, "summary", info.summary.as_deref())?;
            write_field(writer, "repository", info.repository_url.as_deref())?;
        }

        if let Some(health) = &report.health {
            write_health(writer, health)?;
        }

        if let Some(message) = &report.message {
            writeln!(writer, "  {message}")?;
        }
    }

    if !reports.is_empty() {
        writeln!(writer)?;
    }

    let summary = Summary::of(reports);
    writeln!(
        writer,
        "{} healthy, {} unhealthy, {} not checked",
        summary.healthy, summary.unhealthy, summary.unchecked
    )?;

    Ok(())
}

fn write_health<W: Write>(writer: &mut W, health: &HealthCheckResult) -> Result<()> {
    let activity = health.last_activity.as_deref().map(|last| match health.days_since_last_activity {
        Some(days) => format!("{last} ({days} days ago)"),
        None => last.to_string(),
    });

    write_field(writer, "last activity", activity.as_deref())?;
    write_field(writer, "open issues", health.open_issues_count.map(|n| n.to_string()).as_deref())?;
    write_field(writer, "stars", health.stars_count.map(|n| n.to_string()).as_deref())?;
    write_field(writer, "forks", health.forks_count.map(|n| n.to_string()).as_deref())?;
    write_field(writer, "readme", Some(yes_no(health.has_readme)))?;
    write_field(writer, "license", Some(yes_no(health.has_license)))?;

    for warning in &health.warnings {
        writeln!(writer, "  ⚠️ {warning}")?;
    }

    for error in &health.errors {
        writeln!(writer, "  🗙 {error}")?;
    }

    Ok(())
}

fn write_field<W: Write>(writer: &mut W, name: &str, value: Option<&str>) -> Result<()> {
    writeln!(writer, "  {name:<FIELD_WIDTH$} : {}", value.unwrap_or("n/a"))?;
    Ok(())
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
