//! Status Bar (Bottom)
//!
//! Displays:
//! - Current stress state and section angle
//! - Point-circle note when the state is rotation-invariant

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use stress_core::calculations::plane_stress::{PlaneStressInput, PlaneStressResult};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    input: &'a PlaneStressInput,
    result: Option<&'a PlaneStressResult>,
) -> Element<'a, Message> {
    let state_info = format!(
        "σx = {:.0} MPa, σy = {:.0} MPa, τxy = {:.0} MPa, α = {:.0}°",
        input.sigma_x_mpa, input.sigma_y_mpa, input.tau_xy_mpa, input.alpha_deg
    );

    let status = match result {
        Some(r) if r.is_point_circle() => "Point circle (rotation-invariant state)",
        Some(_) => "Ready",
        None => "Invalid input",
    };

    row![
        text(state_info).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
