//! `plot` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mesh_measure::{SvgExportParams, axis_extent, export_section_svg, slice};

use crate::{MeshArgs, config};

/// Write one SVG per landmark into `out_dir`.
///
/// Landmarks without a measurable section still get a file, rendered as
/// a placeholder.
pub fn run(input: &MeshArgs, out_dir: &Path) -> Result<()> {
    let params = config::resolve(input)?;
    let mesh = input.load()?;
    let extent = axis_extent(&mesh, params.axis)
        .with_context(|| format!("Cannot measure {}", input.mesh.display()))?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for landmark in &params.landmarks {
        let height = extent.height_at(landmark.fraction);
        let section = slice(&mesh, height, params.axis);
        let svg_params = SvgExportParams::default()
            .with_title(format!("{} (h={height:.2})", landmark.label));

        let path = svg_path(out_dir, &landmark.label);
        std::fs::write(&path, export_section_svg(&section, &svg_params))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {} ({} points)", path.display(), section.len());
    }

    println!(
        "Wrote {} section plots to {}",
        params.landmarks.len(),
        out_dir.display()
    );
    Ok(())
}

/// File name for a landmark, keeping only characters safe in paths.
fn svg_path(dir: &Path, label: &str) -> PathBuf {
    let stem: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    dir.join(format!("{stem}.svg"))
}
