//! SVG export of cross-sections.

use std::fmt::Write;

use crate::cross_section::CrossSection;

/// Parameters for SVG export.
#[derive(Debug, Clone)]
pub struct SvgExportParams {
    /// Width of the SVG in pixels.
    pub width: u32,
    /// Height of the SVG in pixels.
    pub height: u32,
    /// Padding around the content in pixels.
    pub padding: u32,
    /// Stroke width for segments and hull, in pixels.
    pub stroke_width: f64,
    /// Colour of the section segments (CSS colour string).
    pub section_color: String,
    /// Colour of the convex hull outline.
    pub hull_color: String,
    /// Colour of the centroid marker.
    pub centroid_color: String,
    /// Background colour.
    pub background_color: String,
    /// Whether to draw the convex hull.
    pub show_hull: bool,
    /// Caption drawn above the measurements, e.g. a landmark label.
    pub title: Option<String>,
}

impl Default for SvgExportParams {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            padding: 40,
            stroke_width: 1.5,
            section_color: "#2d5986".to_string(),
            hull_color: "#d9534f".to_string(),
            centroid_color: "#222222".to_string(),
            background_color: "#f5f5f5".to_string(),
            show_hull: true,
            title: None,
        }
    }
}

impl SvgExportParams {
    /// Set section and hull colours.
    #[must_use]
    pub fn with_colors(mut self, section: &str, hull: &str) -> Self {
        self.section_color = section.to_string();
        self.hull_color = hull.to_string();
        self
    }

    /// Set the canvas size.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the caption.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Render a cross-section as SVG.
///
/// Draws every intersection segment, the convex hull used for the
/// circumference, and the centroid. The section is scaled uniformly to
/// fit the canvas; the second plane coordinate points up.
///
/// Sections too small to measure render a placeholder.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, Axis};
/// use mesh_measure::{export_section_svg, slice, SvgExportParams};
///
/// let section = slice(&unit_cube(), 0.5, Axis::Y);
/// let svg = export_section_svg(&section, &SvgExportParams::default().with_title("waist"));
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("waist"));
/// ```
#[must_use]
pub fn export_section_svg(section: &CrossSection, params: &SvgExportParams) -> String {
    let caption = params.title.as_deref().unwrap_or("Section");

    let Some((lo, hi)) = section.bounds_2d().filter(|_| !section.is_degenerate()) else {
        return format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
  <rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>\n\
  <text x=\"50%\" y=\"50%\" text-anchor=\"middle\" fill=\"#999\">{caption}: no section at {axis}={height:.4}</text>\n\
</svg>",
            w = params.width,
            h = params.height,
            bg = params.background_color,
            caption = escape(caption),
            axis = section.axis,
            height = section.height,
        );
    };

    let content_width = hi.x - lo.x;
    let content_height = hi.y - lo.y;

    let padding = f64::from(params.padding);
    let available_width = 2.0f64.mul_add(-padding, f64::from(params.width));
    let available_height = 2.0f64.mul_add(-padding, f64::from(params.height));

    let scale = match (content_width > 0.0, content_height > 0.0) {
        (true, true) => (available_width / content_width).min(available_height / content_height),
        (true, false) => available_width / content_width,
        (false, true) => available_height / content_height,
        (false, false) => 1.0,
    };

    let offset_x = padding + content_width.mul_add(-scale, available_width) / 2.0;
    let offset_y = padding + content_height.mul_add(-scale, available_height) / 2.0;

    // Plane coordinates to canvas pixels, second axis flipped.
    let to_px = |x: f64, y: f64| -> (f64, f64) {
        (
            (x - lo.x).mul_add(scale, offset_x),
            (hi.y - y).mul_add(scale, offset_y),
        )
    };

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
  <rect width="100%" height="100%" fill="{}"/>
"#,
        params.width, params.height, params.width, params.height, params.background_color,
    );

    let mut path = String::new();
    for [a, b] in &section.segments {
        let (Some(pa), Some(pb)) = (section.points.get(*a), section.points.get(*b)) else {
            continue;
        };
        let (x0, y0) = to_px(pa.x, pa.y);
        let (x1, y1) = to_px(pb.x, pb.y);
        let _ = write!(path, "M {x0:.2} {y0:.2} L {x1:.2} {y1:.2} ");
    }
    let _ = writeln!(
        svg,
        r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{:.2}"/>"#,
        path.trim_end(),
        params.section_color,
        params.stroke_width
    );

    if params.show_hull {
        let hull = section.hull();
        if hull.len() >= 3 {
            let points: Vec<String> = hull
                .iter()
                .map(|p| {
                    let (x, y) = to_px(p.x, p.y);
                    format!("{x:.2},{y:.2}")
                })
                .collect();
            let _ = writeln!(
                svg,
                r#"  <polygon points="{}" fill="none" stroke="{}" stroke-width="{:.2}" stroke-dasharray="6 4"/>"#,
                points.join(" "),
                params.hull_color,
                params.stroke_width
            );
        }
    }

    if let Some(c) = section.centroid_2d() {
        let (cx, cy) = to_px(c.x, c.y);
        let _ = writeln!(
            svg,
            r#"  <circle cx="{cx:.2}" cy="{cy:.2}" r="4" fill="{}"/>"#,
            params.centroid_color
        );
    }

    let _ = write!(
        svg,
        "  <text x=\"10\" y=\"20\" font-family=\"monospace\" font-size=\"12\" fill=\"#666\">\n\
    {}: {}={:.4}, circumference={:.4}, width={:.4}, depth={:.4}, points={}\n\
  </text>\n",
        escape(caption),
        section.axis,
        section.height,
        section.circumference(),
        section.width(),
        section.depth(),
        section.len(),
    );

    svg.push_str("</svg>");

    svg
}

/// Escape the characters that are special in SVG text content.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{Axis, unit_cube};

    use crate::slice;

    #[test]
    fn test_svg_export_params_builder() {
        let params = SvgExportParams::default()
            .with_colors("#ff0000", "#000000")
            .with_size(1024, 768)
            .with_title("hip");

        assert_eq!(params.section_color, "#ff0000");
        assert_eq!(params.hull_color, "#000000");
        assert_eq!(params.width, 1024);
        assert_eq!(params.height, 768);
        assert_eq!(params.title.as_deref(), Some("hip"));
    }

    #[test]
    fn test_export_empty_section() {
        let section = slice(&unit_cube(), 5.0, Axis::Y);
        let svg = export_section_svg(&section, &SvgExportParams::default());

        assert!(svg.contains("<svg"));
        assert!(svg.contains("no section"));
        assert!(!svg.contains("<path"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_export_section_draws_outline_hull_and_centroid() {
        let section = slice(&unit_cube(), 0.5, Axis::Z);
        let svg = export_section_svg(&section, &SvgExportParams::default().with_title("waist"));

        assert!(svg.contains("<path"));
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("waist: Z=0.5000"));
        assert!(svg.contains("circumference=4.0000"));
        assert_eq!(svg.matches(" M ").count() + 1, section.segments.len());
    }

    #[test]
    fn test_export_without_hull() {
        let section = slice(&unit_cube(), 0.5, Axis::Z);
        let params = SvgExportParams {
            show_hull: false,
            ..SvgExportParams::default()
        };
        let svg = export_section_svg(&section, &params);
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn test_title_is_escaped() {
        let section = slice(&unit_cube(), 0.5, Axis::Z);
        let svg = export_section_svg(&section, &SvgExportParams::default().with_title("a<b"));
        assert!(svg.contains("a&lt;b"));
    }
}
