//! # ring_core - Wedge-Brick Ring Geometry Engine
//!
//! `ring_core` is the computational heart of Kilnring, computing the geometry
//! of the trapezoidal ("wedge") bricks needed to assemble a segmented circular
//! ring, such as a refractory lining inside a steel barrel. All inputs and
//! outputs are JSON-serializable, making it ideal for integration with AI
//! assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Closed-Form**: One O(1) geometric transform, no iteration
//!
//! ## Quick Start
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
//! assert!((result.miter_angle_deg - 30.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The ring geometry calculation (spec, result, transform)
//! - [`polygon`] - Regular-polygon identities (chords, apothems, flats/corners)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`report`] - Plain-text report rendering

pub mod calculations;
pub mod errors;
pub mod polygon;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::ring::{calculate, FacePolicy, RingResult, RingSpec};
pub use errors::{CalcResult, RingError};
pub use report::text_report;
