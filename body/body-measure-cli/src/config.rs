//! Measurement parameters from a config file and command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use body_measure::MeasureParams;
use mesh_types::Axis;

use crate::MeshArgs;

/// Resolve the parameters for a run.
///
/// The config file (if any) is read first, then `--axis` overrides its axis.
pub fn resolve(args: &MeshArgs) -> Result<MeasureParams> {
    let params = match &args.config {
        Some(path) => read_params(path)?,
        None => MeasureParams::default(),
    };
    Ok(with_axis_override(params, args.axis))
}

fn with_axis_override(params: MeasureParams, axis: Option<Axis>) -> MeasureParams {
    match axis {
        Some(axis) => params.with_axis(axis),
        None => params,
    }
}

/// Read and validate a TOML parameter file.
pub fn read_params(path: &Path) -> Result<MeasureParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let params: MeasureParams = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    params
        .landmarks
        .validate()
        .with_context(|| format!("Invalid landmarks in {}", path.display()))?;
    log::debug!(
        "Read {} landmarks along {} from {}",
        params.landmarks.len(),
        params.axis,
        path.display()
    );
    Ok(params)
}
