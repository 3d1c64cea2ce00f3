use super::Host;
use super::common::read_manifest;
use crate::Result;
use crate::manifest::ManifestKind;
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::IntoAppError;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Manifest file to read
    #[arg(value_name = "FILE")]
    pub file: Utf8PathBuf,

    /// Manifest format (inferred from the file name when omitted)
    #[arg(long, value_name = "TYPE")]
    pub manifest_type: Option<ManifestKind>,
}

pub fn extract_dependencies<H: Host>(host: &mut H, args: &ExtractArgs) -> Result<()> {
    let dependencies = read_manifest(&args.file, args.manifest_type)?;
    let json = serde_json::to_string_pretty(&dependencies).into_app_err("serializing dependencies")?;
    let _ = writeln!(host.output(), "{json}");
    Ok(())
}
