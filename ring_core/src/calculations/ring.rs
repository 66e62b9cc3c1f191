//! # Wedge-Brick Ring Calculation
//!
//! Computes the cut geometry for N trapezoidal bricks that tile a full 360°
//! ring inside a circular barrel, optionally behind a backup insulation layer.
//!
//! ## Assumptions
//!
//! - Perfectly circular barrel bore
//! - Uniform brick radial thickness around the ring
//! - Ideal straight miter cuts (no blade deflection; kerf is reported but
//!   never enters the geometry)
//! - The barrel wall extends outward and does not reduce the usable bore
//! - The brick ring's outer corners sit on the usable bore circle (the
//!   insulation's inner circle when insulation is modeled)
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use ring_core::calculations::ring::{calculate, FacePolicy, RingSpec};
//!
//! let spec = RingSpec {
//!     label: "Forge Lining".to_string(),
//!     brick_count: 6,
//!     barrel_inside_diameter_in: 22.9,
//!     barrel_wall_thickness_in: 0.05,
//!     insulation_min_thickness_in: 3.5,
//!     brick_thickness_in: 2.5,
//!     brick_outer_face_in: 9.0,
//!     saw_kerf_in: 0.125,
//! };
//!
//! let result = calculate(&spec, FacePolicy::Derived).unwrap();
//!
//! println!("Miter per end: {:.3}°", result.miter_angle_deg);
//! println!("Inner face:    {:.3} in", result.inner_face_in);
//! println!("Taper:         {:.3} in per side", result.taper_per_side_in);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, RingError};
use crate::polygon;
use crate::units::{Degrees, Radians};

/// Input parameters for one ring of wedge bricks.
///
/// All lengths use US customary inches. Wall thickness and insulation
/// thickness are optional layers: zero means "not modeled" and suppresses the
/// corresponding output fields.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Forge Lining",
///   "brick_count": 6,
///   "barrel_inside_diameter_in": 22.9,
///   "barrel_wall_thickness_in": 0.05,
///   "insulation_min_thickness_in": 3.5,
///   "brick_thickness_in": 2.5,
///   "brick_outer_face_in": 9.0,
///   "saw_kerf_in": 0.125
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    /// User label for this ring (e.g., "Forge Lining", "Ring 2 of 5")
    pub label: String,

    /// Number of bricks per ring (N). A ring needs at least 3 to close.
    pub brick_count: u32,

    /// Inside diameter of the barrel in inches
    pub barrel_inside_diameter_in: f64,

    /// Barrel wall thickness in inches; 0 = not modeled. The wall extends
    /// outward and never reduces the usable bore.
    pub barrel_wall_thickness_in: f64,

    /// Minimum thickness of the backup insulation lining the bore, in inches;
    /// 0 = not modeled
    pub insulation_min_thickness_in: f64,

    /// Radial thickness of one brick in inches
    pub brick_thickness_in: f64,

    /// Outer (cold-face) length of one brick in inches. Read per
    /// [`FacePolicy`]: the exact face length, or the maximum allowed.
    pub brick_outer_face_in: f64,

    /// Saw blade width in inches. Echoed in reports for the person at the
    /// saw; never enters the computed geometry.
    pub saw_kerf_in: f64,
}

impl RingSpec {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.brick_count < 3 {
            return Err(RingError::InvalidBrickCount {
                count: self.brick_count,
            });
        }
        if !self.barrel_inside_diameter_in.is_finite() || self.barrel_inside_diameter_in <= 0.0 {
            return Err(RingError::invalid_dimension(
                "barrel_inside_diameter_in",
                self.barrel_inside_diameter_in.to_string(),
                "Diameter must be a positive, finite number",
            ));
        }
        if !self.brick_thickness_in.is_finite() || self.brick_thickness_in <= 0.0 {
            return Err(RingError::invalid_dimension(
                "brick_thickness_in",
                self.brick_thickness_in.to_string(),
                "Brick thickness must be a positive, finite number",
            ));
        }
        if !self.brick_outer_face_in.is_finite() || self.brick_outer_face_in <= 0.0 {
            return Err(RingError::invalid_dimension(
                "brick_outer_face_in",
                self.brick_outer_face_in.to_string(),
                "Outer face length must be a positive, finite number",
            ));
        }
        if !self.barrel_wall_thickness_in.is_finite() || self.barrel_wall_thickness_in < 0.0 {
            return Err(RingError::invalid_dimension(
                "barrel_wall_thickness_in",
                self.barrel_wall_thickness_in.to_string(),
                "Wall thickness cannot be negative",
            ));
        }
        if !self.insulation_min_thickness_in.is_finite() || self.insulation_min_thickness_in < 0.0 {
            return Err(RingError::invalid_dimension(
                "insulation_min_thickness_in",
                self.insulation_min_thickness_in.to_string(),
                "Insulation thickness cannot be negative",
            ));
        }
        if !self.saw_kerf_in.is_finite() || self.saw_kerf_in < 0.0 {
            return Err(RingError::invalid_dimension(
                "saw_kerf_in",
                self.saw_kerf_in.to_string(),
                "Kerf cannot be negative",
            ));
        }
        Ok(())
    }

    /// Angle subtended at the ring center by one brick: 360°/N
    pub fn central_angle_deg(&self) -> f64 {
        360.0 / self.brick_count as f64
    }

    /// Miter cut per brick end, off-square: half the central angle
    pub fn miter_angle_deg(&self) -> f64 {
        self.central_angle_deg() / 2.0
    }

    /// Barrel bore radius
    pub fn barrel_inside_radius_in(&self) -> f64 {
        self.barrel_inside_diameter_in / 2.0
    }

    /// Radius of the circle the brick ring's outer corners sit on:
    /// the bore radius less the insulation layer
    pub fn usable_outer_radius_in(&self) -> f64 {
        self.barrel_inside_radius_in() - self.insulation_min_thickness_in
    }

    /// Whether the barrel wall layer is part of this spec
    pub fn models_wall(&self) -> bool {
        self.barrel_wall_thickness_in > 0.0
    }

    /// Whether the backup insulation layer is part of this spec
    pub fn models_insulation(&self) -> bool {
        self.insulation_min_thickness_in > 0.0
    }
}

/// How [`RingSpec::brick_outer_face_in`] is interpreted.
///
/// The two historical variants of this calculator disagreed here, so both
/// readings are kept explicit rather than silently picking one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacePolicy {
    /// Use the given outer face length verbatim, with no consistency check
    /// against the bore. The diagrammed ring may not close exactly.
    Authoritative,

    /// Derive the outer face from the usable bore (the exact chord that
    /// closes the ring) and treat the given value as a maximum. Fails with
    /// [`RingError::InfeasibleGeometry`] when the derived face exceeds it.
    Derived,
}

/// Results from the ring calculation.
///
/// Optional fields are present only when the corresponding layer is modeled
/// in the [`RingSpec`], and are omitted from JSON when absent.
///
/// ## JSON Example
///
/// ```json
/// {
///   "central_angle_deg": 60.0,
///   "miter_angle_deg": 30.0,
///   "outer_face_in": 7.95,
///   "inner_face_in": 5.063,
///   "taper_per_side_in": 1.443,
///   "inner_diameter_flats_in": 9.44,
///   "inner_diameter_corners_in": 10.9,
///   "ring_outer_diameter_max_in": 15.9,
///   "barrel_outer_diameter_in": 23.0,
///   "max_gap_in": 1.065
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingResult {
    // === Angles ===
    /// Central angle per brick: 360°/N
    pub central_angle_deg: f64,

    /// Miter cut per brick end, measured off-square: half the central angle.
    /// Two adjacent mitered ends together turn the ring by one central angle.
    pub miter_angle_deg: f64,

    // === Brick Faces ===
    /// Outer (cold-face) length actually used, in inches. Equals
    /// [`RingSpec::brick_outer_face_in`] under `FacePolicy::Authoritative`;
    /// derived from the bore under `FacePolicy::Derived`.
    pub outer_face_in: f64,

    /// Inner (hot-face) length of the trapezoid in inches
    pub inner_face_in: f64,

    /// Inward taper of each side edge due to the miter cut, in inches
    pub taper_per_side_in: f64,

    // === Clear Opening ===
    /// Inner diameter of the ring measured across flats (the true clearance)
    pub inner_diameter_flats_in: f64,

    /// Inner diameter of the ring measured across corners
    pub inner_diameter_corners_in: f64,

    // === Outer Envelope ===
    /// Outer diameter of the brick ring across corners (its widest extent)
    pub ring_outer_diameter_max_in: f64,

    /// Barrel outside diameter; present only when wall thickness is modeled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barrel_outer_diameter_in: Option<f64>,

    /// Radial bulge gap behind each brick's flat outer face, between the
    /// brick ring and the insulation; present only when insulation is modeled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gap_in: Option<f64>,
}

/// Calculate the wedge-brick geometry for one ring.
///
/// This is a pure function: the same spec and policy always produce the same
/// result, and nothing is mutated.
///
/// # Arguments
///
/// * `spec` - Ring parameters (bore, layers, brick size, count)
/// * `policy` - How to interpret the outer face length
///
/// # Returns
///
/// * `Ok(RingResult)` - The complete cut geometry
/// * `Err(RingError)` - Structured error if the inputs are invalid or the
///   ring cannot exist
///
/// # Example
///
/// ```rust
/// use ring_core::calculations::ring::{calculate, FacePolicy, RingSpec};
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
///
/// let result = calculate(&spec, FacePolicy::Authoritative).expect("geometry is feasible");
/// assert!(result.inner_face_in < result.outer_face_in);
/// ```
pub fn calculate(spec: &RingSpec, policy: FacePolicy) -> CalcResult<RingResult> {
    // Validate inputs before any derivation
    spec.validate()?;

    let n = spec.brick_count;

    // === Angles ===
    let central_angle_deg = spec.central_angle_deg();
    let miter_angle_deg = spec.miter_angle_deg();
    let miter: Radians = Degrees(miter_angle_deg).into();

    // === Usable Bore ===
    // The ring's outer corners sit on this circle.
    let outer_radius_in = spec.usable_outer_radius_in();
    if outer_radius_in <= 0.0 {
        return Err(RingError::infeasible(format!(
            "{:.3} in of insulation leaves no room inside a {:.3} in bore",
            spec.insulation_min_thickness_in, spec.barrel_inside_diameter_in
        )));
    }

    // === Outer Face ===
    let outer_face_in = match policy {
        FacePolicy::Authoritative => spec.brick_outer_face_in,
        FacePolicy::Derived => {
            // The chord that closes the ring exactly
            let face = polygon::side_from_circumradius(outer_radius_in, n);
            if face > spec.brick_outer_face_in {
                return Err(RingError::infeasible(format!(
                    "closing the ring takes a {:.3} in outer face, over the {:.3} in maximum - \
                     use more bricks or a smaller bore",
                    face, spec.brick_outer_face_in
                )));
            }
            face
        }
    };

    // === Inner Corner Circle ===
    let inner_radius_in = outer_radius_in - spec.brick_thickness_in;
    if inner_radius_in <= 0.0 {
        return Err(RingError::infeasible(format!(
            "brick thickness {:.3} in is too large for the usable {:.3} in radius",
            spec.brick_thickness_in, outer_radius_in
        )));
    }

    // Inner face from wedge geometry (straight end cuts): each miter removes
    // thickness * tan(miter) from the hot face.
    let inner_face_in = outer_face_in - 2.0 * spec.brick_thickness_in * miter.tan();
    if inner_face_in <= 0.0 {
        return Err(RingError::infeasible(format!(
            "inner face comes out at {:.3} in - this wedge cannot be cut from a {:.3} in outer face",
            inner_face_in, outer_face_in
        )));
    }

    let taper_per_side_in = (outer_face_in - inner_face_in) / 2.0;

    // === Diameters ===
    let inner_diameter_corners_in = 2.0 * inner_radius_in;
    let inner_diameter_flats_in = polygon::flats_from_corners(inner_diameter_corners_in, n);
    let ring_outer_diameter_max_in = 2.0 * outer_radius_in;

    let barrel_outer_diameter_in = if spec.models_wall() {
        Some(spec.barrel_inside_diameter_in + 2.0 * spec.barrel_wall_thickness_in)
    } else {
        None
    };

    // === Clearance Gap ===
    // Between the flat outer face of each brick and the insulation circle the
    // corners touch. Largest at the face midpoint.
    let max_gap_in = if spec.models_insulation() {
        let ring_outer_flats_in = polygon::flats_from_corners(ring_outer_diameter_max_in, n);
        let gap = (spec.barrel_inside_diameter_in
            - 2.0 * spec.insulation_min_thickness_in
            - ring_outer_flats_in)
            / 2.0;
        if gap < 0.0 {
            return Err(RingError::infeasible(format!(
                "insulation and bricks overrun the bore by {:.3} in",
                -gap
            )));
        }
        Some(gap)
    } else {
        None
    };

    Ok(RingResult {
        central_angle_deg,
        miter_angle_deg,
        outer_face_in,
        inner_face_in,
        taper_per_side_in,
        inner_diameter_flats_in,
        inner_diameter_corners_in,
        ring_outer_diameter_max_in,
        barrel_outer_diameter_in,
        max_gap_in,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-3;

    /// Six bricks behind 3.5" of insulation in a 22.9" bore - the documented
    /// forge lining example
    fn lined_barrel_spec() -> RingSpec {
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

    /// Eight bricks straight against a 24" bore, no wall or insulation layer
    fn bare_barrel_spec() -> RingSpec {
        RingSpec {
            label: "Bare Barrel".to_string(),
            brick_count: 8,
            barrel_inside_diameter_in: 24.0,
            barrel_wall_thickness_in: 0.0,
            insulation_min_thickness_in: 0.0,
            brick_thickness_in: 4.5,
            brick_outer_face_in: 9.0,
            saw_kerf_in: 0.125,
        }
    }

    #[test]
    fn test_lined_barrel_example() {
        let result = calculate(&lined_barrel_spec(), FacePolicy::Derived).unwrap();

        assert!((result.central_angle_deg - 60.0).abs() < TOL);
        assert!((result.miter_angle_deg - 30.0).abs() < TOL);
        assert!((result.outer_face_in - 7.950).abs() < TOL);
        assert!((result.inner_face_in - 5.063).abs() < TOL);
        assert!((result.taper_per_side_in - 1.443).abs() < TOL);
        assert!((result.inner_diameter_flats_in - 9.440).abs() < TOL);
        assert!((result.inner_diameter_corners_in - 10.900).abs() < TOL);
        assert!((result.ring_outer_diameter_max_in - 15.900).abs() < TOL);
        assert!((result.barrel_outer_diameter_in.unwrap() - 23.000).abs() < TOL);
        assert!((result.max_gap_in.unwrap() - 1.065).abs() < TOL);
    }

    #[test]
    fn test_bare_barrel_example() {
        let result = calculate(&bare_barrel_spec(), FacePolicy::Authoritative).unwrap();

        // Outer face is taken verbatim in this mode
        assert!((result.outer_face_in - 9.000).abs() < TOL);
        assert!((result.miter_angle_deg - 22.5).abs() < TOL);
        // inner = 9 - 2 * 4.5 * tan(22.5°)
        assert!((result.inner_face_in - 5.272).abs() < TOL);
        assert!((result.taper_per_side_in - 1.864).abs() < TOL);
        assert!((result.inner_diameter_corners_in - 15.000).abs() < TOL);
        assert!((result.inner_diameter_flats_in - 13.858).abs() < TOL);
        assert!((result.ring_outer_diameter_max_in - 24.000).abs() < TOL);
        assert!(result.barrel_outer_diameter_in.is_none());
        assert!(result.max_gap_in.is_none());
    }

    #[test]
    fn test_central_angles_close_the_ring() {
        for n in [3, 4, 6, 7, 8, 12, 36] {
            let spec = RingSpec {
                brick_count: n,
                brick_thickness_in: 0.5,
                ..bare_barrel_spec()
            };
            let result = calculate(&spec, FacePolicy::Authoritative).unwrap();
            assert!((result.central_angle_deg * n as f64 - 360.0).abs() < 1e-9);
            assert!((result.miter_angle_deg - result.central_angle_deg / 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_inner_face_shorter_than_outer() {
        let lined = calculate(&lined_barrel_spec(), FacePolicy::Derived).unwrap();
        assert!(lined.inner_face_in < lined.outer_face_in);

        let bare = calculate(&bare_barrel_spec(), FacePolicy::Authoritative).unwrap();
        assert!(bare.inner_face_in < bare.outer_face_in);
    }

    #[test]
    fn test_diameter_ordering() {
        let result = calculate(&lined_barrel_spec(), FacePolicy::Derived).unwrap();
        assert!(result.inner_diameter_corners_in > result.inner_diameter_flats_in);
        assert!(result.ring_outer_diameter_max_in > result.inner_diameter_corners_in);
    }

    #[test]
    fn test_idempotent() {
        let spec = lined_barrel_spec();
        let first = calculate(&spec, FacePolicy::Derived).unwrap();
        let second = calculate(&spec, FacePolicy::Derived).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_three_bricks_allowed() {
        let spec = RingSpec {
            brick_count: 3,
            brick_thickness_in: 1.0,
            ..bare_barrel_spec()
        };
        assert!(calculate(&spec, FacePolicy::Authoritative).is_ok());
    }

    #[test]
    fn test_two_bricks_rejected() {
        let spec = RingSpec {
            brick_count: 2,
            ..bare_barrel_spec()
        };
        let err = calculate(&spec, FacePolicy::Authoritative).unwrap_err();
        assert_eq!(err, RingError::InvalidBrickCount { count: 2 });
    }

    #[test]
    fn test_oversized_brick_rejected() {
        let spec = RingSpec {
            brick_thickness_in: 8.0,
            ..lined_barrel_spec()
        };
        let err = calculate(&spec, FacePolicy::Derived).unwrap_err();
        assert_eq!(err.error_code(), "INFEASIBLE_GEOMETRY");
    }

    #[test]
    fn test_collapsed_inner_face_rejected() {
        // N=3 miters at 60° off-square: a 3" thick brick eats the whole 9" face
        let spec = RingSpec {
            brick_count: 3,
            brick_thickness_in: 3.0,
            ..bare_barrel_spec()
        };
        let err = calculate(&spec, FacePolicy::Authoritative).unwrap_err();
        assert_eq!(err.error_code(), "INFEASIBLE_GEOMETRY");
    }

    #[test]
    fn test_face_cap_exceeded_rejected() {
        // Closing a 6-brick ring at radius 7.95 needs a 7.95" face
        let spec = RingSpec {
            brick_outer_face_in: 7.0,
            ..lined_barrel_spec()
        };
        let err = calculate(&spec, FacePolicy::Derived).unwrap_err();
        assert_eq!(err.error_code(), "INFEASIBLE_GEOMETRY");
        // The same cap is fine when the face is authoritative
        assert!(calculate(&spec, FacePolicy::Authoritative).is_ok());
    }

    #[test]
    fn test_insulation_filling_bore_rejected() {
        let spec = RingSpec {
            insulation_min_thickness_in: 12.0,
            ..lined_barrel_spec()
        };
        let err = calculate(&spec, FacePolicy::Derived).unwrap_err();
        assert_eq!(err.error_code(), "INFEASIBLE_GEOMETRY");
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let spec = RingSpec {
            barrel_inside_diameter_in: 0.0,
            ..bare_barrel_spec()
        };
        let err = calculate(&spec, FacePolicy::Authoritative).unwrap_err();
        match err {
            RingError::InvalidDimension { field, .. } => {
                assert_eq!(field, "barrel_inside_diameter_in");
            }
            other => panic!("expected InvalidDimension, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_wall_rejected() {
        let spec = RingSpec {
            barrel_wall_thickness_in: -0.05,
            ..lined_barrel_spec()
        };
        let err = calculate(&spec, FacePolicy::Derived).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_kerf_is_informational() {
        let thin_kerf = lined_barrel_spec();
        let thick_kerf = RingSpec {
            saw_kerf_in: 0.375,
            ..lined_barrel_spec()
        };
        let a = calculate(&thin_kerf, FacePolicy::Derived).unwrap();
        let b = calculate(&thick_kerf, FacePolicy::Derived).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unmodeled_layers_omitted_from_json() {
        let result = calculate(&bare_barrel_spec(), FacePolicy::Authoritative).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("barrel_outer_diameter_in").is_none());
        assert!(json.get("max_gap_in").is_none());
    }
}
