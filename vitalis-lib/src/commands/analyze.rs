use super::Host;
use super::common::{ColorMode, PolicyArgs, TokenArgs, config_base_dir, health_evaluator, read_manifest};
use super::config::Config;
use crate::Result;
use crate::analysis::{Analyzer, DependencyReport, Verdict};
use crate::manifest::ManifestKind;
use crate::registry::RegistryClient;
use crate::reports::{generate_console, generate_json};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "   analyze";

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Manifest file to analyze
    #[arg(value_name = "FILE")]
    pub file: Utf8PathBuf,

    /// Manifest format (inferred from the file name when omitted)
    #[arg(long, value_name = "TYPE")]
    pub manifest_type: Option<ManifestKind>,

    /// Path to configuration file (default is `vitalis.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Output analysis results to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output analysis results to the console.
    /// If omitted, console output is shown only when no other reports are generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    #[command(flatten)]
    pub tokens: TokenArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Exit with status code 1 if any dependency is unhealthy
    #[arg(long)]
    pub error_if_unhealthy: bool,
}

pub async fn analyze_manifest<H: Host>(host: &mut H, args: &AnalyzeArgs) -> Result<()> {
    let dependencies = read_manifest(&args.file, args.manifest_type)?;
    log::info!(target: LOG_TARGET, "Found {} dependencies in '{}'", dependencies.len(), args.file);

    let config = Config::load(&config_base_dir(), args.config.as_ref())?;
    let policy = args.policy.apply(config.policy());

    let registry = RegistryClient::new(&config.pypi_url, &config.npm_url, config.request_timeout())?;
    let evaluator = health_evaluator(&config, &args.tokens)?;
    let analyzer = Analyzer::new(registry, evaluator, config.max_concurrent_dependencies);

    let reports = analyzer.analyze(&dependencies, &policy).await;
    report(host, args, &reports)
}

fn report<H: Host>(host: &mut H, args: &AnalyzeArgs, reports: &[DependencyReport]) -> Result<()> {
    // Show console output if:
    // - --console flag is explicitly set, OR
    // - No reports are being generated AND --error-if-unhealthy is not set
    let show_console = args.console || (args.json.is_none() && !args.error_if_unhealthy);

    if show_console && !reports.is_empty() {
        let mut console_output = String::new();
        generate_console(reports, args.color.use_colors(), &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    let failed: Vec<_> = reports.iter().filter(|r| r.error).collect();
    if !failed.is_empty() {
        let _ = writeln!(host.error(), "\nUnable to analyze {} dependencies", failed.len());
        for failure in failed {
            let _ = writeln!(host.error(), "  {}: {}", failure.dependency, failure.message.as_deref().unwrap_or("unknown error"));
        }
    }

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(reports, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
    }

    if args.error_if_unhealthy && reports.iter().any(|r| r.verdict() == Verdict::Unhealthy) {
        return Err(ohno::AppError::new("one or more dependencies are unhealthy"));
    }

    Ok(())
}
