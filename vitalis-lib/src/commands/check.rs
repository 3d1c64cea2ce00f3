use super::Host;
use super::common::{PolicyArgs, TokenArgs, config_base_dir, health_evaluator};
use super::config::Config;
use crate::Result;
use crate::repo::RepoRef;
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::{IntoAppError, bail};
use std::io::Write;

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Repository URL, such as `https://github.com/psf/requests`
    #[arg(value_name = "URL")]
    pub url: String,

    /// Path to configuration file (default is `vitalis.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub tokens: TokenArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Exit with status code 1 if the repository is unhealthy
    #[arg(long)]
    pub error_if_unhealthy: bool,
}

/// Evaluate a single repository and print the result as JSON.
pub async fn check_repository<H: Host>(host: &mut H, args: &CheckArgs) -> Result<()> {
    let Some(repo) = RepoRef::parse(&args.url) else {
        bail!("'{}' is not a repository on GitHub, GitLab, or Bitbucket", args.url);
    };

    let config = Config::load(&config_base_dir(), args.config.as_ref())?;
    let policy = args.policy.apply(config.policy());
    let evaluator = health_evaluator(&config, &args.tokens)?;

    let Some(result) = evaluator.evaluate(&repo, &policy).await else {
        bail!("health checks are not supported for {} repositories", repo.platform().display_name());
    };

    let json = serde_json::to_string_pretty(&result).into_app_err("serializing health check result")?;
    let _ = writeln!(host.output(), "{json}");

    if args.error_if_unhealthy && !result.is_healthy {
        return Err(ohno::AppError::new("the repository is unhealthy"));
    }

    Ok(())
}
