//! # Regular-Polygon Identities
//!
//! A brick ring is a regular N-gon: the brick outer faces are its sides, the
//! across-flats diameter is twice its apothem, and the across-corners diameter
//! is twice its circumradius. This module collects the closed-form relations
//! between those quantities so the calculation never re-derives trigonometry
//! inline.
//!
//! Conventions: `n` is the side count (≥ 3), lengths are in whatever unit the
//! caller uses (this crate uses inches throughout).

use std::f64::consts::PI;

/// Half the central angle of one side, in radians: π/n.
pub fn half_central_angle_rad(n: u32) -> f64 {
    PI / n as f64
}

/// Side (chord) length of a regular n-gon with circumradius `r`:
/// s = 2·r·sin(π/n).
pub fn side_from_circumradius(r: f64, n: u32) -> f64 {
    2.0 * r * half_central_angle_rad(n).sin()
}

/// Apothem (center to side midpoint) of a regular n-gon with circumradius
/// `r`: a = r·cos(π/n).
pub fn apothem_from_circumradius(r: f64, n: u32) -> f64 {
    r * half_central_angle_rad(n).cos()
}

/// Circumradius of a regular n-gon with side length `s`.
pub fn circumradius_from_side(s: f64, n: u32) -> f64 {
    s / (2.0 * half_central_angle_rad(n).sin())
}

/// Apothem of a regular n-gon with side length `s`: a = s / (2·tan(π/n)).
pub fn apothem_from_side(s: f64, n: u32) -> f64 {
    s / (2.0 * half_central_angle_rad(n).tan())
}

/// Convert an across-corners diameter to across-flats.
pub fn flats_from_corners(d_corners: f64, n: u32) -> f64 {
    d_corners * half_central_angle_rad(n).cos()
}

/// Convert an across-flats diameter to across-corners.
pub fn corners_from_flats(d_flats: f64, n: u32) -> f64 {
    d_flats / half_central_angle_rad(n).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_hexagon_side_equals_circumradius() {
        assert!((side_from_circumradius(7.95, 6) - 7.95).abs() < EPS);
    }

    #[test]
    fn test_square_flats_to_corners() {
        // For a square, across-corners = across-flats * sqrt(2)
        let corners = corners_from_flats(10.0, 4);
        assert!((corners - 10.0 * 2.0_f64.sqrt()).abs() < 1e-9);
        assert!((flats_from_corners(corners, 4) - 10.0).abs() < EPS);
    }

    #[test]
    fn test_side_and_circumradius_invert() {
        let s = side_from_circumradius(12.0, 8);
        assert!((circumradius_from_side(s, 8) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_apothem_identities_agree() {
        // Both apothem routes must land on the same value
        let r = 11.45;
        let n = 6;
        let s = side_from_circumradius(r, n);
        let a_from_r = apothem_from_circumradius(r, n);
        let a_from_s = apothem_from_side(s, n);
        assert!((a_from_r - a_from_s).abs() < 1e-9);
    }

    #[test]
    fn test_apothem_shorter_than_circumradius() {
        for n in 3..=16 {
            assert!(apothem_from_circumradius(1.0, n) < 1.0);
        }
    }
}
