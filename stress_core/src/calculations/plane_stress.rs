//! # Plane-Stress Transformation
//!
//! Evaluates the stress state on a section rotated by α through a point in
//! 2D plane stress, plus the Mohr's circle parameters (center, radius,
//! principal stresses, maximum shear stress) and the geometric primitives
//! the UI needs to draw the circle.
//!
//! ## Assumptions
//!
//! - 2D plane stress only (two normal stresses, one shear stress)
//! - Stresses in MPa, angle collected in degrees
//! - Tension-positive sign convention
//!
//! ## Example
//!
//! ```rust
//! use stress_core::calculations::plane_stress::{calculate, PlaneStressInput};
//!
//! let input = PlaneStressInput {
//!     label: "Wing skin test point".to_string(),
//!     sigma_x_mpa: 80.0,
//!     sigma_y_mpa: -20.0,
//!     tau_xy_mpa: 40.0,
//!     alpha_deg: 0.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("σα = {:.2} MPa", result.sigma_alpha_mpa);
//! println!("σ1 = {:.2} MPa, σ3 = {:.2} MPa", result.sigma_1_mpa, result.sigma_3_mpa);
//! println!("τmax = {:.2} MPa", result.tau_max_mpa);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{StressError, StressResult};
use crate::units::{Degrees, Radians};

/// View extent used when the stress state is identically zero, so the plotted
/// square window never collapses to a zero-size view.
pub const FALLBACK_VIEW_EXTENT_MPA: f64 = 100.0;

/// Margin applied around the circle when suggesting a view extent.
const VIEW_MARGIN_FACTOR: f64 = 1.5;

/// Input parameters for a plane-stress analysis.
///
/// The UI constrains σx, σy to [-200, 200] MPa, τxy to [-100, 100] MPa and
/// α to [0°, 180°], but the computation itself is correct for any finite
/// values; `validate` only rejects non-finite numbers.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Wing skin panel",
///   "sigma_x_mpa": 80.0,
///   "sigma_y_mpa": -20.0,
///   "tau_xy_mpa": 40.0,
///   "alpha_deg": 30.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneStressInput {
    /// User label for this stress state (e.g., "Wing skin panel at rib 4")
    pub label: String,

    /// Normal stress along x (MPa)
    pub sigma_x_mpa: f64,

    /// Normal stress along y (MPa)
    pub sigma_y_mpa: f64,

    /// Shear stress on the reference section (MPa)
    pub tau_xy_mpa: f64,

    /// Section rotation angle (degrees), converted to radians internally
    pub alpha_deg: f64,
}

impl Default for PlaneStressInput {
    /// Typical aircraft aluminum wing-skin panel stress state, the default
    /// the teaching tool opens with.
    fn default() -> Self {
        Self {
            label: "Wing skin panel".to_string(),
            sigma_x_mpa: 80.0,
            sigma_y_mpa: -20.0,
            tau_xy_mpa: 40.0,
            alpha_deg: 0.0,
        }
    }
}

impl PlaneStressInput {
    /// Validate input parameters.
    ///
    /// The transformation equations are total over finite reals, so the only
    /// rejected inputs are NaN and infinities.
    pub fn validate(&self) -> StressResult<()> {
        for (field, value) in [
            ("sigma_x_mpa", self.sigma_x_mpa),
            ("sigma_y_mpa", self.sigma_y_mpa),
            ("tau_xy_mpa", self.tau_xy_mpa),
            ("alpha_deg", self.alpha_deg),
        ] {
            if !value.is_finite() {
                return Err(StressError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
        }
        Ok(())
    }

    /// Section rotation angle in radians
    pub fn alpha_rad(&self) -> f64 {
        Radians::from(Degrees(self.alpha_deg)).0
    }
}

/// Mohr's circle parameters and principal stresses for a plane stress state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalStresses {
    /// Circle center c = (σx + σy) / 2 (MPa)
    pub center_mpa: f64,

    /// Circle radius r = sqrt(((σx - σy)/2)² + τxy²) (MPa, never negative)
    pub radius_mpa: f64,

    /// First (maximum) principal stress σ1 = c + r (MPa)
    pub sigma_1_mpa: f64,

    /// Third (minimum) principal stress σ3 = c - r (MPa)
    pub sigma_3_mpa: f64,

    /// Maximum shear stress magnitude τmax = r (MPa)
    pub tau_max_mpa: f64,
}

impl PrincipalStresses {
    /// True when the circle degenerates to a single point (σx = σy, τxy = 0),
    /// i.e. the stress state is the same on every section orientation.
    pub fn is_point_circle(&self) -> bool {
        self.radius_mpa == 0.0
    }
}

/// Geometric primitives for drawing the circle diagram.
///
/// Everything the rendering layer needs: the circle itself, the current
/// state point, the two principal-stress points on the σ axis, and a
/// suggested half-width for a square view window around the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MohrCircle {
    /// Circle center on the σ axis: (c, 0)
    pub center: (f64, f64),

    /// Circle radius (MPa)
    pub radius: f64,

    /// Current state point (σα, τα) for the chosen section angle
    pub state_point: (f64, f64),

    /// First principal-stress point (σ1, 0)
    pub sigma_1_point: (f64, f64),

    /// Third principal-stress point (σ3, 0)
    pub sigma_3_point: (f64, f64),

    /// Suggested half-extent of a square view window, max(|σ1|, |σ3|, r) × 1.5,
    /// falling back to 100 MPa for the all-zero state
    pub view_extent: f64,
}

/// Results from a plane-stress analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sigma_alpha_mpa": 80.0,
///   "tau_alpha_mpa": 40.0,
///   "center_mpa": 30.0,
///   "radius_mpa": 64.03,
///   "sigma_1_mpa": 94.03,
///   "sigma_3_mpa": -34.03,
///   "tau_max_mpa": 64.03,
///   "circle": {
///     "center": [30.0, 0.0],
///     "radius": 64.03,
///     "state_point": [80.0, 40.0],
///     "sigma_1_point": [94.03, 0.0],
///     "sigma_3_point": [-34.03, 0.0],
///     "view_extent": 141.05
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneStressResult {
    /// Normal stress on the section rotated by α (MPa)
    pub sigma_alpha_mpa: f64,

    /// Shear stress on the section rotated by α (MPa)
    pub tau_alpha_mpa: f64,

    /// Circle center (MPa)
    pub center_mpa: f64,

    /// Circle radius (MPa)
    pub radius_mpa: f64,

    /// First principal stress (MPa)
    pub sigma_1_mpa: f64,

    /// Third principal stress (MPa)
    pub sigma_3_mpa: f64,

    /// Maximum shear stress (MPa)
    pub tau_max_mpa: f64,

    /// Drawing primitives for the rendering layer
    pub circle: MohrCircle,
}

impl PlaneStressResult {
    /// True when the stress state maps to a point circle (hydrostatic or
    /// isotropic biaxial state); every section sees the same stresses.
    pub fn is_point_circle(&self) -> bool {
        self.radius_mpa == 0.0
    }
}

/// Stress components on a section rotated by `alpha_rad`.
///
/// The closed-form transformation equations:
///
/// - σα = (σx + σy)/2 + (σx − σy)/2 · cos(2α) − τxy · sin(2α)
/// - τα = (σx − σy)/2 · sin(2α) + τxy · cos(2α)
///
/// Total over all finite real inputs, no side effects. Returns (σα, τα).
pub fn transform(sigma_x: f64, sigma_y: f64, tau_xy: f64, alpha_rad: f64) -> (f64, f64) {
    let mean = (sigma_x + sigma_y) / 2.0;
    let half_diff = (sigma_x - sigma_y) / 2.0;
    let (sin_2a, cos_2a) = (2.0 * alpha_rad).sin_cos();

    let sigma_alpha = mean + half_diff * cos_2a - tau_xy * sin_2a;
    let tau_alpha = half_diff * sin_2a + tau_xy * cos_2a;

    (sigma_alpha, tau_alpha)
}

/// Mohr's circle parameters for a plane stress state.
///
/// The degenerate state σx = σy, τxy = 0 yields a zero-radius point circle
/// with σ1 = σ3 = c and τmax = 0; that is a valid result, not an error.
pub fn principal(sigma_x: f64, sigma_y: f64, tau_xy: f64) -> PrincipalStresses {
    let center = (sigma_x + sigma_y) / 2.0;
    // Sum of squares, so the radicand is never negative
    let radius = (((sigma_x - sigma_y) / 2.0).powi(2) + tau_xy.powi(2)).sqrt();

    PrincipalStresses {
        center_mpa: center,
        radius_mpa: radius,
        sigma_1_mpa: center + radius,
        sigma_3_mpa: center - radius,
        tau_max_mpa: radius,
    }
}

/// Suggested half-extent of a square view window around the origin.
///
/// max(|σ1|, |σ3|, r) × 1.5, substituting a fixed fallback when the state is
/// identically zero so the view never degenerates.
pub fn view_extent(principal: &PrincipalStresses) -> f64 {
    let extent = principal
        .sigma_1_mpa
        .abs()
        .max(principal.sigma_3_mpa.abs())
        .max(principal.radius_mpa)
        * VIEW_MARGIN_FACTOR;

    if extent == 0.0 {
        FALLBACK_VIEW_EXTENT_MPA
    } else {
        extent
    }
}

/// Run the full plane-stress analysis.
///
/// This is a pure function: identical inputs always produce identical
/// outputs, nothing is cached, and each invocation is independent.
///
/// # Arguments
///
/// * `input` - Stress state (σx, σy, τxy in MPa) and section angle α (degrees)
///
/// # Returns
///
/// * `Ok(PlaneStressResult)` - Transformed stresses, principal stresses, and
///   circle geometry
/// * `Err(StressError)` - Structured error if any input is non-finite
///
/// # Example
///
/// ```rust
/// use stress_core::calculations::plane_stress::{calculate, PlaneStressInput};
///
/// let input = PlaneStressInput {
///     label: "Test point".to_string(),
///     sigma_x_mpa: 80.0,
///     sigma_y_mpa: -20.0,
///     tau_xy_mpa: 40.0,
///     alpha_deg: 0.0,
/// };
///
/// let result = calculate(&input).expect("Calculation should succeed");
/// assert!((result.sigma_alpha_mpa - 80.0).abs() < 1e-9);
/// assert!((result.tau_max_mpa - 64.03).abs() < 0.01);
/// ```
pub fn calculate(input: &PlaneStressInput) -> StressResult<PlaneStressResult> {
    // Validate inputs
    input.validate()?;

    // Degrees are a UI concern; the trigonometry works in radians
    let alpha_rad = input.alpha_rad();

    let (sigma_alpha, tau_alpha) = transform(
        input.sigma_x_mpa,
        input.sigma_y_mpa,
        input.tau_xy_mpa,
        alpha_rad,
    );

    let p = principal(input.sigma_x_mpa, input.sigma_y_mpa, input.tau_xy_mpa);

    let circle = MohrCircle {
        center: (p.center_mpa, 0.0),
        radius: p.radius_mpa,
        state_point: (sigma_alpha, tau_alpha),
        sigma_1_point: (p.sigma_1_mpa, 0.0),
        sigma_3_point: (p.sigma_3_mpa, 0.0),
        view_extent: view_extent(&p),
    };

    Ok(PlaneStressResult {
        sigma_alpha_mpa: sigma_alpha,
        tau_alpha_mpa: tau_alpha,
        center_mpa: p.center_mpa,
        radius_mpa: p.radius_mpa,
        sigma_1_mpa: p.sigma_1_mpa,
        sigma_3_mpa: p.sigma_3_mpa,
        tau_max_mpa: p.tau_max_mpa,
        circle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    /// Wing-skin default: σx=80, σy=-20, τxy=40
    fn test_input(alpha_deg: f64) -> PlaneStressInput {
        PlaneStressInput {
            label: "Test point".to_string(),
            sigma_x_mpa: 80.0,
            sigma_y_mpa: -20.0,
            tau_xy_mpa: 40.0,
            alpha_deg,
        }
    }

    #[test]
    fn test_identity_at_zero_rotation() {
        // α = 0 returns the reference-section stresses unchanged
        for &(sx, sy, txy) in &[(80.0, -20.0, 40.0), (-150.0, 60.0, -75.0), (1.0, 2.0, 3.0)] {
            let (sigma, tau) = transform(sx, sy, txy, 0.0);
            assert!((sigma - sx).abs() < TOL);
            assert!((tau - txy).abs() < TOL);
        }
    }

    #[test]
    fn test_ninety_degree_rotation() {
        // α = 90° swaps to the orthogonal section: σα = σy, τα = -τxy
        for &(sx, sy, txy) in &[(80.0, -20.0, 40.0), (-150.0, 60.0, -75.0)] {
            let (sigma, tau) = transform(sx, sy, txy, PI / 2.0);
            assert!((sigma - sy).abs() < 1e-6);
            assert!((tau + txy).abs() < 1e-6);
        }
    }

    #[test]
    fn test_half_turn_periodicity() {
        // transform is 180°-periodic in α
        for i in 0..=36 {
            let alpha = i as f64 * PI / 36.0;
            let (s1, t1) = transform(80.0, -20.0, 40.0, alpha);
            let (s2, t2) = transform(80.0, -20.0, 40.0, alpha + PI);
            assert!((s1 - s2).abs() < 1e-6);
            assert!((t1 - t2).abs() < 1e-6);
        }
    }

    #[test]
    fn test_trace_invariance() {
        // Sum of normal stresses on orthogonal sections equals σx + σy
        for i in 0..=180 {
            let alpha = (i as f64).to_radians();
            let (s_a, _) = transform(80.0, -20.0, 40.0, alpha);
            let (s_b, _) = transform(80.0, -20.0, 40.0, alpha + PI / 2.0);
            assert!((s_a + s_b - 60.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_wing_skin_scenario() {
        // σx=80, σy=-20, τxy=40, α=0: half-diff = 50, r = sqrt(50² + 40²)
        let result = calculate(&test_input(0.0)).unwrap();
        assert!((result.sigma_alpha_mpa - 80.00).abs() < 0.005);
        assert!((result.tau_alpha_mpa - 40.00).abs() < 0.005);
        assert!((result.center_mpa - 30.00).abs() < 0.005);
        assert!((result.radius_mpa - 64.03).abs() < 0.005);
        assert!((result.sigma_1_mpa - 94.03).abs() < 0.005);
        assert!((result.sigma_3_mpa + 34.03).abs() < 0.005);
        assert!((result.tau_max_mpa - 64.03).abs() < 0.005);
    }

    #[test]
    fn test_zero_state_is_point_circle() {
        let input = PlaneStressInput {
            label: "Unloaded".to_string(),
            sigma_x_mpa: 0.0,
            sigma_y_mpa: 0.0,
            tau_xy_mpa: 0.0,
            alpha_deg: 37.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.sigma_alpha_mpa, 0.0);
        assert_eq!(result.tau_alpha_mpa, 0.0);
        assert_eq!(result.center_mpa, 0.0);
        assert_eq!(result.radius_mpa, 0.0);
        assert_eq!(result.sigma_1_mpa, 0.0);
        assert_eq!(result.sigma_3_mpa, 0.0);
        assert_eq!(result.tau_max_mpa, 0.0);
        assert!(result.is_point_circle());
        // Zero-extent guard keeps the view window usable
        assert_eq!(result.circle.view_extent, FALLBACK_VIEW_EXTENT_MPA);
    }

    #[test]
    fn test_isotropic_biaxial_is_rotation_invariant() {
        // σx = σy = 100, τxy = 0: every section sees σ = 100, τ = 0
        for alpha_deg in [0.0, 17.0, 45.0, 90.0, 133.0, 180.0] {
            let input = PlaneStressInput {
                label: "Isotropic".to_string(),
                sigma_x_mpa: 100.0,
                sigma_y_mpa: 100.0,
                tau_xy_mpa: 0.0,
                alpha_deg,
            };
            let result = calculate(&input).unwrap();
            assert!((result.sigma_alpha_mpa - 100.0).abs() < 1e-6);
            assert!(result.tau_alpha_mpa.abs() < 1e-6);
            assert!(result.is_point_circle());
            assert_eq!(result.sigma_1_mpa, result.sigma_3_mpa);
        }
    }

    #[test]
    fn test_principal_ordering_invariant() {
        // σ1 >= σ3 always; equality only for the point circle
        for &(sx, sy, txy) in &[
            (80.0, -20.0, 40.0),
            (-200.0, 200.0, -100.0),
            (5.0, 5.0, 0.0),
            (0.0, 0.0, 1.0),
            (1e6, -1e6, 3e5),
        ] {
            let p = principal(sx, sy, txy);
            assert!(p.sigma_1_mpa >= p.sigma_3_mpa);
            assert!(p.tau_max_mpa >= 0.0);
            assert_eq!(p.tau_max_mpa, p.radius_mpa);
            let degenerate = sx == sy && txy == 0.0;
            assert_eq!(p.sigma_1_mpa == p.sigma_3_mpa, degenerate);
            assert_eq!(p.is_point_circle(), degenerate);
        }
    }

    #[test]
    fn test_outside_ui_ranges() {
        // The core must stay correct beyond the slider bounds
        let input = PlaneStressInput {
            label: "Overrange".to_string(),
            sigma_x_mpa: 1500.0,
            sigma_y_mpa: -900.0,
            tau_xy_mpa: 640.0,
            alpha_deg: 300.0,
        };
        let result = calculate(&input).unwrap();
        let p = principal(1500.0, -900.0, 640.0);
        assert!((result.center_mpa - 300.0).abs() < TOL);
        assert!(result.sigma_1_mpa >= result.sigma_3_mpa);
        assert_eq!(result.radius_mpa, p.radius_mpa);
    }

    #[test]
    fn test_state_point_lies_on_circle() {
        // (σα, τα) is at distance r from (c, 0) for every α
        for i in 0..=180 {
            let result = calculate(&test_input(i as f64)).unwrap();
            let (sx, sy) = result.circle.state_point;
            let (cx, cy) = result.circle.center;
            let dist = ((sx - cx).powi(2) + (sy - cy).powi(2)).sqrt();
            assert!((dist - result.radius_mpa).abs() < 1e-6);
        }
    }

    #[test]
    fn test_view_extent_scaling() {
        let result = calculate(&test_input(0.0)).unwrap();
        // σ1 has the largest magnitude here, so extent = σ1 * 1.5
        assert!((result.circle.view_extent - result.sigma_1_mpa * 1.5).abs() < 1e-9);
        assert!((result.circle.view_extent - 141.05).abs() < 0.01);
    }

    #[test]
    fn test_rejects_non_finite_input() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut input = test_input(0.0);
            input.tau_xy_mpa = bad;
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }

        let mut input = test_input(0.0);
        input.alpha_deg = f64::NAN;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_idempotent() {
        let a = calculate(&test_input(42.0)).unwrap();
        let b = calculate(&test_input(42.0)).unwrap();
        assert_eq!(a.sigma_alpha_mpa, b.sigma_alpha_mpa);
        assert_eq!(a.tau_alpha_mpa, b.tau_alpha_mpa);
        assert_eq!(a.circle, b.circle);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_input(30.0);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: PlaneStressInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.sigma_x_mpa, roundtrip.sigma_x_mpa);
        assert_eq!(input.alpha_deg, roundtrip.alpha_deg);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_input(30.0)).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        // Should contain key fields
        assert!(json.contains("sigma_alpha_mpa"));
        assert!(json.contains("tau_max_mpa"));
        assert!(json.contains("view_extent"));

        let roundtrip: PlaneStressResult = serde_json::from_str(&json).unwrap();
        assert!((result.sigma_alpha_mpa - roundtrip.sigma_alpha_mpa).abs() < 1e-12);
        assert_eq!(result.circle, roundtrip.circle);
    }
}
