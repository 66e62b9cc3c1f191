//! Shared drawing primitives for the two diagrams: engineering-style
//! dimensions with extension lines and double-headed arrows, angle arcs with
//! labels, and dashed reference lines.
//!
//! Coordinates are SVG pixels (y down). Angle arguments use the usual math
//! convention (degrees, counterclockwise from +x, y up) and are flipped into
//! screen space here, so callers can think in drawing terms.

use svg::node::element::path::Data;
use svg::node::element::{Definitions, Group, Line, Marker, Path, Text};

pub const LINE_COLOR: &str = "#1a1a1a";
pub const FONT: &str = "monospace";

/// Arrowhead marker shared by all dimension lines; reference with
/// `url(#arrow)`. Add this once per document before any dimension.
pub fn arrow_defs() -> Definitions {
    let head = Path::new()
        .set("d", "M 0 0 L 8 3 L 0 6 z")
        .set("fill", LINE_COLOR);
    let marker = Marker::new()
        .set("id", "arrow")
        .set("viewBox", "0 0 8 6")
        .set("refX", 8)
        .set("refY", 3)
        .set("markerWidth", 8)
        .set("markerHeight", 6)
        .set("orient", "auto-start-reverse")
        .add(head);
    Definitions::new().add(marker)
}

pub fn thin_line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", LINE_COLOR)
        .set("stroke-width", 1)
}

pub fn dashed_line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    thin_line(x1, y1, x2, y2).set("stroke-dasharray", "5 4")
}

/// Centered text.
pub fn label(x: f64, y: f64, size: f64, content: &str) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-family", FONT)
        .set("font-size", size)
        .set("fill", LINE_COLOR)
        .set("text-anchor", "middle")
}

fn arrowed_line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    thin_line(x1, y1, x2, y2)
        .set("marker-start", "url(#arrow)")
        .set("marker-end", "url(#arrow)")
}

/// Horizontal dimension between x1 and x2. Extension lines run from the
/// measured feature at `y_feature` to the dimension line at `y_dim` (equal
/// values skip them); the label sits just clear of the line, above when the
/// dimension is above the feature and below otherwise.
pub fn dim_h(x1: f64, x2: f64, y_feature: f64, y_dim: f64, text: &str) -> Group {
    let mut group = Group::new();
    if (y_feature - y_dim).abs() > f64::EPSILON {
        group = group
            .add(thin_line(x1, y_feature, x1, y_dim))
            .add(thin_line(x2, y_feature, x2, y_dim));
    }
    let text_y = if y_dim <= y_feature { y_dim - 6.0 } else { y_dim + 16.0 };
    group
        .add(arrowed_line(x1, y_dim, x2, y_dim))
        .add(label((x1 + x2) / 2.0, text_y, 12.0, text))
}

/// Vertical dimension between y1 and y2, with the label to the right of the
/// dimension line.
pub fn dim_v(y1: f64, y2: f64, x_feature: f64, x_dim: f64, text: &str) -> Group {
    let mut group = Group::new();
    if (x_feature - x_dim).abs() > f64::EPSILON {
        group = group
            .add(thin_line(x_feature, y1, x_dim, y1))
            .add(thin_line(x_feature, y2, x_dim, y2));
    }
    group
        .add(arrowed_line(x_dim, y1, x_dim, y2))
        .add(
            label(x_dim + 8.0, (y1 + y2) / 2.0 + 4.0, 12.0, text)
                .set("text-anchor", "start"),
        )
}

fn arc_point(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (cx + radius * rad.cos(), cy - radius * rad.sin())
}

/// Arc + label for an angle callout. `start_deg` to `end_deg` runs
/// counterclockwise (math convention) and must span less than 180°.
pub fn angle_arc(
    cx: f64,
    cy: f64,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    label_text: &str,
    label_angle_deg: f64,
    label_radius: f64,
) -> Group {
    let (sx, sy) = arc_point(cx, cy, radius, start_deg);
    let (ex, ey) = arc_point(cx, cy, radius, end_deg);
    // Counterclockwise in math coordinates renders with sweep flag 0 once y
    // is flipped into screen space.
    let data = Data::new()
        .move_to((sx, sy))
        .elliptical_arc_to((radius, radius, 0, 0, 0, ex, ey));
    let arc = Path::new()
        .set("d", data)
        .set("fill", "none")
        .set("stroke", LINE_COLOR)
        .set("stroke-width", 1);

    let (lx, ly) = arc_point(cx, cy, label_radius, label_angle_deg);
    Group::new()
        .add(arc)
        .add(label(lx, ly + 3.0, 9.0, label_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_h_skips_degenerate_extension_lines() {
        let flat = dim_h(0.0, 100.0, 50.0, 50.0, "x").to_string();
        let offset = dim_h(0.0, 100.0, 40.0, 50.0, "x").to_string();
        assert_eq!(flat.matches("<line").count(), 1);
        assert_eq!(offset.matches("<line").count(), 3);
    }

    #[test]
    fn test_angle_arc_has_arc_and_label() {
        let group = angle_arc(0.0, 0.0, 20.0, 270.0, 300.0, "30.00°", 285.0, 36.0).to_string();
        assert!(group.contains("<path"));
        assert!(group.contains("30.00°"));
    }

    #[test]
    fn test_arrow_defs_define_the_referenced_marker() {
        let defs = arrow_defs().to_string();
        assert!(defs.contains("id=\"arrow\""));
    }
}
