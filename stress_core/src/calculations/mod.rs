//! # Stress Calculations
//!
//! This module contains the plane-stress calculation. It follows the pattern
//! used throughout the crate:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, StressError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`plane_stress`] - Stress transformation at a rotated section and
//!   Mohr's circle geometry (center, radius, principal stresses, max shear)

pub mod plane_stress;

// Re-export commonly used types
pub use plane_stress::{
    calculate, principal, transform, MohrCircle, PlaneStressInput, PlaneStressResult,
    PrincipalStresses,
};
