//! # Unit Types
//!
//! Type-safe wrappers for the units this crate works in. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Ring geometry uses exactly two unit families (length and angle)
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! All lengths are US customary inches at the boundary; all angles are
//! degrees at the boundary and radians inside the trigonometry.
//!
//! ## Example
//!
//! ```rust
//! use ring_core::units::{Degrees, Inches, Radians};
//!
//! let miter = Degrees(30.0);
//! let rad: Radians = miter.into();
//! assert!((rad.0 - std::f64::consts::FRAC_PI_6).abs() < 1e-12);
//!
//! let face = Inches(9.0);
//! assert_eq!((face / 2.0).0, 4.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl Add for Inches {
    type Output = Inches;
    fn add(self, rhs: Inches) -> Inches {
        Inches(self.0 + rhs.0)
    }
}

impl Sub for Inches {
    type Output = Inches;
    fn sub(self, rhs: Inches) -> Inches {
        Inches(self.0 - rhs.0)
    }
}

impl Mul<f64> for Inches {
    type Output = Inches;
    fn mul(self, rhs: f64) -> Inches {
        Inches(self.0 * rhs)
    }
}

impl Div<f64> for Inches {
    type Output = Inches;
    fn div(self, rhs: f64) -> Inches {
        Inches(self.0 / rhs)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Radians {
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn tan(self) -> f64 {
        self.0.tan()
    }
}

impl Div<f64> for Degrees {
    type Output = Degrees;
    fn div(self, rhs: f64) -> Degrees {
        Degrees(self.0 / rhs)
    }
}

impl Mul<f64> for Degrees {
    type Output = Degrees;
    fn mul(self, rhs: f64) -> Degrees {
        Degrees(self.0 * rhs)
    }
}
