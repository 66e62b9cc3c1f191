//! # Ring Calculations
//!
//! This module contains the geometry calculations. Each calculation follows
//! the pattern:
//!
//! - `*Spec` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(spec, policy) -> Result<*Result, RingError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`ring`] - Wedge-brick ring geometry (central/miter angles, face lengths,
//!   diameters, clearance gap)

pub mod ring;

// Re-export commonly used types
pub use ring::{calculate, FacePolicy, RingResult, RingSpec};
