//! # Text Report
//!
//! Renders a ring spec and its computed geometry as the labeled plain-text
//! block printed at the end of a calculator run. Lengths are inches to three
//! decimals, angles degrees to three decimals; lines for the wall and
//! insulation layers appear only when those layers are modeled.

use crate::calculations::ring::{RingResult, RingSpec};

const LABEL_WIDTH: usize = 33;

fn push_length(out: &mut String, label: &str, value_in: f64) {
    out.push_str(&format!("{label:<LABEL_WIDTH$}{value_in:>9.3} in\n"));
}

fn push_angle(out: &mut String, label: &str, value_deg: f64, note: &str) {
    out.push_str(&format!("{label:<LABEL_WIDTH$}{value_deg:>9.3}°{note}\n"));
}

/// Render the `=== INPUTS ===` / `=== OUTPUTS ===` report.
///
/// # Example
///
/// ```rust
/// use ring_core::calculations::ring::{calculate, FacePolicy, RingSpec};
/// use ring_core::report::text_report;
///
/// let spec = RingSpec {
///     label: "Bare Barrel".to_string(),
///     brick_count: 8,
///     barrel_inside_diameter_in: 24.0,
///     barrel_wall_thickness_in: 0.0,
///     insulation_min_thickness_in: 0.0,
///     brick_thickness_in: 4.5,
///     brick_outer_face_in: 9.0,
///     saw_kerf_in: 0.125,
/// };
/// let result = calculate(&spec, FacePolicy::Authoritative).unwrap();
///
/// let report = text_report(&spec, &result);
/// assert!(report.contains("Miter angle per end:"));
/// ```
pub fn text_report(spec: &RingSpec, result: &RingResult) -> String {
    let mut out = String::new();

    out.push_str("=== INPUTS ===\n");
    out.push_str(&format!("{:<LABEL_WIDTH$}{:>9}\n", "N:", spec.brick_count));
    push_length(&mut out, "Barrel inside diameter:", spec.barrel_inside_diameter_in);
    if spec.models_wall() {
        push_length(&mut out, "Barrel wall thickness:", spec.barrel_wall_thickness_in);
    }
    if spec.models_insulation() {
        push_length(
            &mut out,
            "Backup insulation min thickness:",
            spec.insulation_min_thickness_in,
        );
    }
    push_length(&mut out, "Brick thickness (radial):", spec.brick_thickness_in);
    push_length(&mut out, "Brick outer face length:", spec.brick_outer_face_in);
    push_length(&mut out, "Saw kerf:", spec.saw_kerf_in);

    out.push('\n');
    out.push_str("=== OUTPUTS ===\n");
    push_angle(&mut out, "Central angle:", result.central_angle_deg, "");
    push_angle(
        &mut out,
        "Miter angle per end:",
        result.miter_angle_deg,
        " (off-square)",
    );
    push_length(&mut out, "Inner face length:", result.inner_face_in);
    push_length(&mut out, "Taper per side:", result.taper_per_side_in);
    push_length(
        &mut out,
        "Inner diameter across flats:",
        result.inner_diameter_flats_in,
    );
    push_length(
        &mut out,
        "Inner diameter across corners:",
        result.inner_diameter_corners_in,
    );
    push_length(
        &mut out,
        "Brick ring outer diameter (max):",
        result.ring_outer_diameter_max_in,
    );
    if let Some(barrel_outer) = result.barrel_outer_diameter_in {
        push_length(&mut out, "Barrel outer diameter:", barrel_outer);
    }
    if let Some(gap) = result.max_gap_in {
        push_length(&mut out, "Max gap thickness:", gap);
    }

    out
}
