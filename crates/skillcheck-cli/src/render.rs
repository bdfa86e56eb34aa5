//! Console output for verification results.

use std::io::Write;

use anyhow::Result;
use skillcheck_types::skill::VerifyReport;

/// Startup line, printed before any check runs.
pub fn write_banner(out: &mut impl Write, skill: &str) -> Result<()> {
    writeln!(out, "Verifying {skill}...")?;
    out.flush()?;
    Ok(())
}

/// Success or failure line for a finished pass.
pub fn write_outcome(out: &mut impl Write, report: &VerifyReport) -> Result<()> {
    if report.is_ready() {
        writeln!(out, "[OK] {} skill ready", report.skill)?;
    } else {
        writeln!(out, "Missing files: {}", report.missing)?;
    }
    Ok(())
}

/// Single pretty-printed JSON object describing the pass.
pub fn write_json(out: &mut impl Write, report: &VerifyReport) -> Result<()> {
    let payload = serde_json::json!({
        "skill": report.skill,
        "base_dir": report.base_dir.display().to_string(),
        "ready": report.is_ready(),
        "missing": report.missing,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
    Ok(())
}
