//! # Stress-State Presets
//!
//! Named example stress states for the teaching UI. Each preset seeds the
//! sliders with a loading situation worth exploring on the circle: the
//! aircraft wing-skin panel the course narrative starts from, plus the
//! textbook special cases (uniaxial tension, pure shear, hydrostatic).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calculations::plane_stress::PlaneStressInput;

/// A named example plane-stress state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressPreset {
    /// Typical aircraft aluminum wing-skin panel (the app default)
    WingSkinPanel,
    /// Uniaxial tension: σx only, zero on every other component
    UniaxialTension,
    /// Pure shear: τxy only, circle centered at the origin
    PureShear,
    /// Equal biaxial tension: point circle, same stress on every section
    Hydrostatic,
}

impl StressPreset {
    /// All presets, in display order
    pub const ALL: [StressPreset; 4] = [
        StressPreset::WingSkinPanel,
        StressPreset::UniaxialTension,
        StressPreset::PureShear,
        StressPreset::Hydrostatic,
    ];

    /// Human-readable name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            StressPreset::WingSkinPanel => "Wing skin panel",
            StressPreset::UniaxialTension => "Uniaxial tension",
            StressPreset::PureShear => "Pure shear",
            StressPreset::Hydrostatic => "Hydrostatic",
        }
    }

    /// The stress state this preset loads into the sliders (α starts at 0°)
    pub fn input(&self) -> PlaneStressInput {
        let (sigma_x, sigma_y, tau_xy) = match self {
            StressPreset::WingSkinPanel => (80.0, -20.0, 40.0),
            StressPreset::UniaxialTension => (120.0, 0.0, 0.0),
            StressPreset::PureShear => (0.0, 0.0, 60.0),
            StressPreset::Hydrostatic => (100.0, 100.0, 0.0),
        };

        PlaneStressInput {
            label: self.display_name().to_string(),
            sigma_x_mpa: sigma_x,
            sigma_y_mpa: sigma_y,
            tau_xy_mpa: tau_xy,
            alpha_deg: 0.0,
        }
    }
}

impl fmt::Display for StressPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
