//! Running demos and rendering their reports

use crate::catalog::Demo;
use crate::config::{CheckConfig, OutputFormat};
use crate::error::{CheckError, CheckResult};
use demo_artifact::ArtifactReport;

/// Run one demo's artifact check
///
/// # Errors
/// Returns `CheckError::Artifact` if the notebook or figure cannot be read
pub fn run_demo(demo: Demo, config: &CheckConfig) -> CheckResult<ArtifactReport> {
    tracing::debug!(demo = demo.name(), root = %config.root.display(), "running demo");
    demo.check(&config.root)
        .run()
        .map_err(|e| CheckError::artifact(demo.name(), e))
}

/// Run every demo in catalog order, stopping at the first failure
///
/// # Errors
/// Returns the first demo's `CheckError`
pub fn run_all(config: &CheckConfig) -> CheckResult<Vec<ArtifactReport>> {
    Demo::ALL
        .into_iter()
        .map(|demo| run_demo(demo, config))
        .collect()
}

/// Render reports in the configured format
///
/// Text reports are separated by a blank line. JSON renders a single report
/// as an object and several as an array.
///
/// # Errors
/// Returns `CheckError::Render` if JSON serialization fails
pub fn render(reports: &[ArtifactReport], format: OutputFormat) -> CheckResult<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => match reports {
            [report] => Ok(report.to_json()?),
            _ => Ok(serde_json::to_string_pretty(reports)?),
        },
    }
}
