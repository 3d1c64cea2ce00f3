use crate::Result;
use crate::analysis::DependencyReport;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(reports: &[DependencyReport], writer: &mut W) -> Result<()> {
    let output = json!({
        "results": reports,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
