//! Command dispatch logic for vitalis

use super::common::{LogLevel, init_logging};
use super::{AnalyzeArgs, CheckArgs, ExtractArgs, InitArgs, analyze_manifest, check_repository, extract_dependencies, init_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "vitalis", author, version, long_about = None)]
#[command(about = "Check the health of the repositories behind your dependencies")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: VitalisSubcommand,
}

#[derive(Subcommand, Debug)]
enum VitalisSubcommand {
    /// List the dependencies declared in a manifest
    Extract(ExtractArgs),
    /// Analyze the dependencies of a manifest and report their health
    Analyze(Box<AnalyzeArgs>),
    /// Evaluate the health of a single repository
    Check(Box<CheckArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    init_logging(cli.log_level);

    match &cli.command {
        VitalisSubcommand::Extract(extract_args) => extract_dependencies(host, extract_args),
        VitalisSubcommand::Analyze(analyze_args) => analyze_manifest(host, analyze_args).await,
        VitalisSubcommand::Check(check_args) => check_repository(host, check_args).await,
        VitalisSubcommand::Init(init_args) => init_config(host, init_args),
    }
}
