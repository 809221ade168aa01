//! `report` command.

use anyhow::{Context, Result, ensure};
use body_measure::{MeasurementReport, build_report};

use crate::{MeshArgs, OutputFormat, config};

/// Measure every landmark and print the report to stdout.
pub fn run(input: &MeshArgs, format: OutputFormat, unit_scale: f64, unit: &str) -> Result<()> {
    ensure!(
        unit_scale.is_finite() && unit_scale > 0.0,
        "--unit-scale must be a positive number, got {unit_scale}"
    );

    let params = config::resolve(input)?;
    let mesh = input.load()?;
    let report = build_report(&mesh, &params)
        .with_context(|| format!("Failed to measure {}", input.mesh.display()))?;

    for missing in &report.missing {
        log::warn!(
            "No section at {} ({}={:.4}); landmark left unmeasured",
            missing.label,
            report.axis,
            missing.height
        );
    }

    print!("{}", render(&report, format, unit_scale, unit)?);
    Ok(())
}

fn render(
    report: &MeasurementReport,
    format: OutputFormat,
    unit_scale: f64,
    unit: &str,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => report.display_scaled(unit_scale, unit).to_string(),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            json.push('\n');
            json
        }
    })
}
