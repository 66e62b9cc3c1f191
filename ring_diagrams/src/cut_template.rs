//! Single-brick cut template: the trapezoid laid flat with its outer face
//! horizontal, dimension callouts on all four measurements, and the miter
//! angle marked at both outer corners against a dashed square reference.

use ring_core::calculations::ring::{RingResult, RingSpec};
use svg::node::element::Polygon;
use svg::Document;

use crate::draw::{angle_arc, arrow_defs, dashed_line, dim_h, dim_v, label, LINE_COLOR};
use crate::SCALE;

/// Data needed to draw the cut template
#[derive(Debug, Clone)]
pub struct CutTemplateData {
    pub outer_face_in: f64,
    pub inner_face_in: f64,
    pub taper_per_side_in: f64,
    pub brick_thickness_in: f64,
    pub miter_angle_deg: f64,
    pub central_angle_deg: f64,
    pub saw_kerf_in: f64,
}

impl CutTemplateData {
    pub fn from_calc(spec: &RingSpec, result: &RingResult) -> Self {
        Self {
            outer_face_in: result.outer_face_in,
            inner_face_in: result.inner_face_in,
            taper_per_side_in: result.taper_per_side_in,
            brick_thickness_in: spec.brick_thickness_in,
            miter_angle_deg: result.miter_angle_deg,
            central_angle_deg: result.central_angle_deg,
            saw_kerf_in: spec.saw_kerf_in,
        }
    }
}

/// Render the cut template from prepared data.
pub fn render(data: &CutTemplateData) -> Document {
    let face_px = data.outer_face_in * SCALE;
    let thickness_px = data.brick_thickness_in * SCALE;
    let taper_px = data.taper_per_side_in * SCALE;
    let inner_px = data.inner_face_in * SCALE;

    // Room at the left for the left miter label, at the right for the
    // thickness label, above for the title, note block, and outer face
    // dimension, below for the inner face and taper dimensions.
    let left = 90.0;
    let top = 150.0;
    let width = left + face_px + 190.0;
    let height = top + thickness_px + 110.0;

    // Trapezoid corners, outer face up
    let outer_left = (left, top);
    let outer_right = (left + face_px, top);
    let inner_left = (left + taper_px, top + thickness_px);
    let inner_right = (left + taper_px + inner_px, top + thickness_px);

    let brick_center_x = left + face_px / 2.0;

    let outline = format!(
        "{:.2},{:.2} {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
        outer_left.0,
        outer_left.1,
        outer_right.0,
        outer_right.1,
        inner_right.0,
        inner_right.1,
        inner_left.0,
        inner_left.1,
    );

    let mut doc = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
        .add(arrow_defs())
        .add(label(brick_center_x, 26.0, 14.0, "Single Brick - CUT TEMPLATE"))
        .add(
            Polygon::new()
                .set("points", outline)
                .set("fill", "none")
                .set("stroke", LINE_COLOR)
                .set("stroke-width", 2),
        );

    // Note block between title and brick
    let notes = [
        format!(
            "Miter per end = {:.2}° (off-square)",
            data.miter_angle_deg
        ),
        format!("Central angle = {:.2}°", data.central_angle_deg),
        format!("Saw kerf = {:.3} in", data.saw_kerf_in),
    ];
    for (i, note) in notes.iter().enumerate() {
        doc = doc.add(label(brick_center_x, 54.0 + i as f64 * 17.0, 11.0, note));
    }

    // Dimension callouts
    doc = doc
        .add(dim_h(
            outer_left.0,
            outer_right.0,
            top,
            top - 22.0,
            &format!("{:.3} in  (Outer face)", data.outer_face_in),
        ))
        .add(dim_h(
            inner_left.0,
            inner_right.0,
            top + thickness_px,
            top + thickness_px + 26.0,
            &format!("{:.3} in  (Inner face)", data.inner_face_in),
        ))
        .add(dim_v(
            top,
            top + thickness_px,
            outer_right.0,
            outer_right.0 + 32.0,
            &format!("{:.3} in  (Thickness)", data.brick_thickness_in),
        ))
        .add(dim_h(
            outer_left.0,
            inner_left.0,
            top + thickness_px,
            top + thickness_px + 64.0,
            &format!("{:.3} in  (Taper each side)", data.taper_per_side_in),
        ));

    // Miter callouts: dashed square reference straight down from each outer
    // corner, arc out to the slanted cut edge
    let ref_len = 1.4 * SCALE;
    let arc_radius = 0.9 * SCALE;
    let label_radius = 1.9 * arc_radius;

    doc = doc
        .add(dashed_line(
            outer_left.0,
            outer_left.1,
            outer_left.0,
            outer_left.1 + ref_len,
        ))
        .add(angle_arc(
            outer_left.0,
            outer_left.1,
            arc_radius,
            270.0,
            270.0 + data.miter_angle_deg,
            &format!("{:.2}°", data.miter_angle_deg),
            270.0 + data.miter_angle_deg / 2.0,
            label_radius,
        ))
        .add(dashed_line(
            outer_right.0,
            outer_right.1,
            outer_right.0,
            outer_right.1 + ref_len,
        ))
        .add(angle_arc(
            outer_right.0,
            outer_right.1,
            arc_radius,
            270.0 - data.miter_angle_deg,
            270.0,
            &format!("{:.2}°", data.miter_angle_deg),
            270.0 - data.miter_angle_deg / 2.0,
            label_radius,
        ));

    doc
}

/// Build the template data from a spec/result pair and render it.
pub fn cut_template(spec: &RingSpec, result: &RingResult) -> Document {
    render(&CutTemplateData::from_calc(spec, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring_core::calculations::ring::{calculate, FacePolicy};

    fn lined_spec() -> RingSpec {
        RingSpec {
            label: "Forge Lining".to_string(),
            brick_count: 6,
            barrel_inside_diameter_in: 22.9,
            barrel_wall_thickness_in: 0.05,
            insulation_min_thickness_in: 3.5,
            brick_thickness_in: 2.5,
            brick_outer_face_in: 9.0,
            saw_kerf_in: 0.125,
        }
    }

    fn rendered() -> String {
        let spec = lined_spec();
        let result = calculate(&spec, FacePolicy::Derived).unwrap();
        cut_template(&spec, &result).to_string()
    }

    #[test]
    fn test_single_trapezoid_outline() {
        assert_eq!(rendered().matches("<polygon").count(), 1);
    }

    #[test]
    fn test_dimension_callouts_present() {
        let svg_text = rendered();
        assert!(svg_text.contains("Single Brick - CUT TEMPLATE"));
        assert!(svg_text.contains("7.950 in  (Outer face)"));
        assert!(svg_text.contains("5.063 in  (Inner face)"));
        assert!(svg_text.contains("2.500 in  (Thickness)"));
        assert!(svg_text.contains("1.443 in  (Taper each side)"));
    }

    #[test]
    fn test_miter_callouts_and_notes() {
        let svg_text = rendered();
        // One label per corner callout plus the note line
        assert_eq!(svg_text.matches("30.00°").count(), 3);
        assert!(svg_text.contains("Miter per end = 30.00° (off-square)"));
        assert!(svg_text.contains("Central angle = 60.00°"));
        assert!(svg_text.contains("Saw kerf = 0.125 in"));
    }
}
