//! Top-view ring layout: the barrel bore, the optional insulation circle, the
//! brick ring drawn as N wedges, and the three key diameters dimensioned
//! below the ring.

use std::f64::consts::TAU;

use ring_core::calculations::ring::{RingResult, RingSpec};
use svg::node::element::{Circle, Polygon};
use svg::Document;

use crate::draw::{arrow_defs, dim_h, label, LINE_COLOR};
use crate::SCALE;

/// Data needed to draw the top-view ring layout
#[derive(Debug, Clone)]
pub struct RingLayoutData {
    pub brick_count: u32,
    pub barrel_inside_diameter_in: f64,
    pub insulation_min_thickness_in: f64,
    pub inner_diameter_flats_in: f64,
    pub inner_diameter_corners_in: f64,
    pub ring_outer_diameter_max_in: f64,
}

impl RingLayoutData {
    pub fn from_calc(spec: &RingSpec, result: &RingResult) -> Self {
        Self {
            brick_count: spec.brick_count,
            barrel_inside_diameter_in: spec.barrel_inside_diameter_in,
            insulation_min_thickness_in: spec.insulation_min_thickness_in,
            inner_diameter_flats_in: result.inner_diameter_flats_in,
            inner_diameter_corners_in: result.inner_diameter_corners_in,
            ring_outer_diameter_max_in: result.ring_outer_diameter_max_in,
        }
    }

    fn barrel_radius_in(&self) -> f64 {
        self.barrel_inside_diameter_in / 2.0
    }

    /// Radius of the circle the brick corners touch (insulation inner circle
    /// when insulation is modeled, the bore itself otherwise)
    fn ring_outer_radius_in(&self) -> f64 {
        self.ring_outer_diameter_max_in / 2.0
    }

    fn inner_corner_radius_in(&self) -> f64 {
        self.inner_diameter_corners_in / 2.0
    }

    fn incircle_radius_in(&self) -> f64 {
        self.inner_diameter_flats_in / 2.0
    }

    fn models_insulation(&self) -> bool {
        self.insulation_min_thickness_in > 0.0
    }
}

fn construction_circle(cx: f64, cy: f64, r: f64) -> Circle {
    Circle::new()
        .set("cx", cx)
        .set("cy", cy)
        .set("r", r)
        .set("fill", "none")
        .set("stroke", LINE_COLOR)
        .set("stroke-width", 1)
}

/// Render the top view from prepared data.
pub fn render(data: &RingLayoutData) -> Document {
    let r_barrel = data.barrel_radius_in() * SCALE;
    let r_outer = data.ring_outer_radius_in() * SCALE;
    let r_inner = data.inner_corner_radius_in() * SCALE;
    let r_incircle = data.incircle_radius_in() * SCALE;

    let margin = 80.0;
    let top = 70.0;
    let cx = margin + r_barrel;
    let cy = top + r_barrel;

    // Stacked diameter dimensions below the ring
    let dims_base_y = cy + r_barrel + 42.0;
    let dims_step = 44.0;

    let width = 2.0 * (margin + r_barrel);
    let height = dims_base_y + 2.0 * dims_step + 40.0;

    let mut doc = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
        .add(arrow_defs())
        .add(label(
            cx,
            28.0,
            16.0,
            &format!("Template for {}-Sided Brick Lining", data.brick_count),
        ))
        .add(label(cx, 50.0, 13.0, "Top View"));

    // Construction circles: bore, insulation inner (when modeled), inner
    // corner circle, inner incircle (the true clearance)
    doc = doc.add(construction_circle(cx, cy, r_barrel));
    if data.models_insulation() {
        doc = doc.add(construction_circle(cx, cy, r_outer));
    }
    doc = doc
        .add(construction_circle(cx, cy, r_inner))
        .add(construction_circle(cx, cy, r_incircle));

    // Wedge bricks as 4-point polygons between the inner and outer radius
    let step = TAU / data.brick_count as f64;
    for i in 0..data.brick_count {
        let theta0 = i as f64 * step;
        let theta1 = (i as f64 + 1.0) * step;
        let points = [
            (r_inner, theta0),
            (r_inner, theta1),
            (r_outer, theta1),
            (r_outer, theta0),
        ]
        .iter()
        .map(|&(r, theta)| {
            format!("{:.2},{:.2}", cx + r * theta.cos(), cy - r * theta.sin())
        })
        .collect::<Vec<_>>()
        .join(" ");
        doc = doc.add(
            Polygon::new()
                .set("points", points)
                .set("fill", "none")
                .set("stroke", LINE_COLOR)
                .set("stroke-width", 1),
        );
    }

    // Diameter dimensions, widest first
    let dims = [
        (r_barrel, data.barrel_inside_diameter_in, "Barrel diameter"),
        (
            r_incircle,
            data.inner_diameter_flats_in,
            "Inner diameter across flats",
        ),
        (
            r_inner,
            data.inner_diameter_corners_in,
            "Inner diameter across corners",
        ),
    ];
    for (i, (r_px, value_in, name)) in dims.iter().enumerate() {
        let y = dims_base_y + i as f64 * dims_step;
        doc = doc.add(dim_h(
            cx - r_px,
            cx + r_px,
            y,
            y,
            &format!("Ø {value_in:.3} in  ({name})"),
        ));
    }

    doc
}

/// Build the layout data from a spec/result pair and render it.
pub fn ring_layout(spec: &RingSpec, result: &RingResult) -> Document {
    render(&RingLayoutData::from_calc(spec, result))
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

    #[test]
    fn test_one_wedge_polygon_per_brick() {
        let spec = lined_spec();
        let result = calculate(&spec, FacePolicy::Derived).unwrap();
        let rendered = ring_layout(&spec, &result).to_string();
        assert_eq!(rendered.matches("<polygon").count(), 6);
    }

    #[test]
    fn test_insulation_adds_a_circle() {
        let lined = lined_spec();
        let lined_result = calculate(&lined, FacePolicy::Derived).unwrap();
        assert_eq!(
            ring_layout(&lined, &lined_result)
                .to_string()
                .matches("<circle")
                .count(),
            4
        );

        let bare = RingSpec {
            barrel_wall_thickness_in: 0.0,
            insulation_min_thickness_in: 0.0,
            brick_thickness_in: 4.5,
            ..lined_spec()
        };
        let bare_result = calculate(&bare, FacePolicy::Authoritative).unwrap();
        assert_eq!(
            ring_layout(&bare, &bare_result)
                .to_string()
                .matches("<circle")
                .count(),
            3
        );
    }

    #[test]
    fn test_title_and_diameter_labels() {
        let spec = lined_spec();
        let result = calculate(&spec, FacePolicy::Derived).unwrap();
        let rendered = ring_layout(&spec, &result).to_string();
        assert!(rendered.contains("Template for 6-Sided Brick Lining"));
        assert!(rendered.contains("Top View"));
        assert!(rendered.contains("Ø 22.900 in  (Barrel diameter)"));
        assert!(rendered.contains("Ø 9.440 in  (Inner diameter across flats)"));
        assert!(rendered.contains("Ø 10.900 in  (Inner diameter across corners)"));
    }
}
