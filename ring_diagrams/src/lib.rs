//! # ring_diagrams - Diagram Rendering for Kilnring
//!
//! Renders a computed ring geometry into two shop-ready SVG documents:
//!
//! - [`ring_layout`] - top view of the full N-gon ring inside the barrel,
//!   with the key diameters dimensioned below it
//! - [`cut_template`] - a single brick trapezoid with dimension and miter
//!   angle callouts
//!
//! No geometry is computed here. Each renderer consumes a small data struct
//! built with `from_calc(&spec, &result)`; every dimension value on the page
//! comes from `ring_core`.
//!
//! ## Example
//!
//! ```rust,no_run
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
//! let result = calculate(&spec, FacePolicy::Derived).unwrap();
//!
//! let layout = ring_diagrams::ring_layout(&spec, &result);
//! svg::save("ring_layout.svg", &layout).unwrap();
//! ```

pub mod cut_template;
pub mod draw;
pub mod ring_layout;

pub use cut_template::{cut_template, CutTemplateData};
pub use ring_layout::{ring_layout, RingLayoutData};

/// Pixels per inch used by both diagrams.
pub(crate) const SCALE: f64 = 24.0;
