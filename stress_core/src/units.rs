//! # Unit Types
//!
//! Type-safe wrappers for the units the engine deals in. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Plane-stress analysis uses exactly one stress unit and two angle units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! The course material works in SI: stresses in megapascals (MPa), section
//! angles collected in degrees and converted to radians at the computation
//! boundary.
//!
//! ## Example
//!
//! ```rust
//! use stress_core::units::{Degrees, MPa, Radians};
//!
//! let alpha = Degrees(90.0);
//! let alpha_rad: Radians = alpha.into();
//! assert!((alpha_rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let sigma = MPa(80.0);
//! assert_eq!((sigma * 2.0).0, 160.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MPa(pub f64);

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

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(MPa);
impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_degrees_to_radians() {
        let deg = Degrees(180.0);
        let rad: Radians = deg.into();
        assert!((rad.0 - PI).abs() < 1e-12);
    }

    #[test]
    fn test_radians_to_degrees() {
        let rad = Radians(PI / 4.0);
        let deg: Degrees = rad.into();
        assert!((deg.0 - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = MPa(80.0);
        let b = MPa(-20.0);
        assert_eq!((a + b).0, 60.0);
        assert_eq!((a - b).0, 100.0);
        assert_eq!((a * 0.5).0, 40.0);
        assert_eq!((a / 2.0).0, 40.0);
    }

    #[test]
    fn test_serialization() {
        let sigma = MPa(42.5);
        let json = serde_json::to_string(&sigma).unwrap();
        assert_eq!(json, "42.5");

        let roundtrip: MPa = serde_json::from_str(&json).unwrap();
        assert_eq!(sigma, roundtrip);
    }
}
