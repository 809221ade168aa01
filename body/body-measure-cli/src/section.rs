//! `section` command.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use mesh_measure::{CrossSection, SvgExportParams, axis_extent, export_section_svg, slice};

use crate::{MeshArgs, config};

/// Slice the mesh at one height and print what the section measures.
pub fn run(
    input: &MeshArgs,
    height: Option<f64>,
    fraction: Option<f64>,
    svg: Option<&Path>,
) -> Result<()> {
    let params = config::resolve(input)?;
    let mesh = input.load()?;
    let extent = axis_extent(&mesh, params.axis)
        .with_context(|| format!("Cannot measure {}", input.mesh.display()))?;

    let height = match (height, fraction) {
        (Some(h), _) => h,
        (None, Some(f)) => extent.height_at(f),
        (None, None) => anyhow::bail!("either --height or --fraction is required"),
    };
    ensure!(height.is_finite(), "section height must be finite, got {height}");

    let section = slice(&mesh, height, params.axis);
    print!("{}", describe(&section));

    if let Some(path) = svg {
        let title = format!("{} = {height:.4}", params.axis);
        let doc = export_section_svg(&section, &SvgExportParams::default().with_title(title));
        std::fs::write(path, doc)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn describe(section: &CrossSection) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Section at {}={:.4}", section.axis, section.height);
    let _ = writeln!(out, "  Points: {}", section.len());

    match section.centroid() {
        Some(c) if !section.is_degenerate() => {
            let _ = writeln!(out, "  Circumference: {:.4}", section.circumference());
            let _ = writeln!(out, "  Width: {:.4}", section.width());
            let _ = writeln!(out, "  Depth: {:.4}", section.depth());
            let _ = writeln!(out, "  Centroid: ({:.4}, {:.4}, {:.4})", c.x, c.y, c.z);
        }
        _ => {
            let _ = writeln!(out, "  Too few points to measure");
        }
    }
    out
}
