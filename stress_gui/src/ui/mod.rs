//! UI module for MohrLab GUI
//!
//! This module organizes the GUI into panels and components.
//!
//! # Panel Structure
//! - `input_panel` - Left panel: preset picker, stress-state and angle sliders
//! - `results_panel` - Right panel: computed stresses and the circle diagram
//! - `status_bar` - Bottom status messages (current state, point-circle note)
//!
//! # Shared Components
//! - `shared/diagrams` - Canvas drawing for the Mohr's circle diagram

pub mod input_panel;
pub mod results_panel;
pub mod status_bar;

pub mod shared;
