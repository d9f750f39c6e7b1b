//! # stress_core - Plane-Stress Analysis Engine
//!
//! `stress_core` is the computational heart of MohrLab, a teaching tool for
//! plane-stress transformation and Mohr's circle. Given a 2D stress state
//! (σx, σy, τxy) and a section rotation angle α, it evaluates the transformed
//! stresses on the rotated section, the principal stresses, the maximum shear
//! stress, and the circle geometry needed to draw the classic diagram.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Total math**: The transformation equations are well-defined for every
//!   finite real input; only non-finite values are rejected at the boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use stress_core::calculations::plane_stress::{calculate, PlaneStressInput};
//!
//! // Typical aircraft wing-skin panel stress state
//! let input = PlaneStressInput::default();
//! let result = calculate(&input).unwrap();
//!
//! assert!(result.sigma_1_mpa >= result.sigma_3_mpa);
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Plane-stress transformation and Mohr's circle geometry
//! - [`presets`] - Named example stress states for the teaching UI
//! - [`units`] - Type-safe unit wrappers (MPa, degrees, radians)
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod presets;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::plane_stress::{calculate, PlaneStressInput, PlaneStressResult};
pub use errors::{StressError, StressResult};
pub use presets::StressPreset;
