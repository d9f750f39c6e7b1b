//! Results Panel (Right Side)
//!
//! Shows:
//! - Transformed stresses σα, τα on the rotated section
//! - Principal stresses σ1, σ3 and maximum shear stress τmax
//! - Circle parameters (center, radius)
//! - The Mohr's circle diagram rendered on a canvas
//!
//! Falls back to an error display when the inputs were rejected.

use iced::widget::{column, container, scrollable, text, Canvas, Column, Space};
use iced::{Element, Length};

use stress_core::calculations::plane_stress::{PlaneStressInput, PlaneStressResult};

use super::shared::diagrams::{MohrDiagram, MohrDiagramData};
use crate::{App, Message};

/// Render the results panel
///
/// The `input_ratio` parameter is the ratio used by the input panel.
/// This panel uses the complementary ratio (1 - input_ratio).
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let content: Column<'_, Message> = if let Some(ref error) = app.error_message {
        column![
            text("Error").size(14),
            Space::new().height(8),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ]
    } else if let Some(ref result) = app.result {
        view_stress_results(&app.input, result)
    } else {
        column![text("Adjust the sliders to analyze a stress state")
            .size(14)
            .color([0.5, 0.5, 0.5])]
    };

    // Use complementary ratio (scale to 0-100 for better precision)
    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Render the computed stresses and the circle diagram
fn view_stress_results<'a>(
    input: &'a PlaneStressInput,
    result: &'a PlaneStressResult,
) -> Column<'a, Message> {
    let diagram_data = MohrDiagramData::from_result(result, input.alpha_deg);
    let diagram = MohrDiagram::new(diagram_data);

    let canvas_widget: Element<'_, Message> = Canvas::new(diagram)
        .width(Length::Fill)
        .height(Length::Fixed(380.0))
        .into();

    let degenerate_note: Element<'_, Message> = if result.is_point_circle() {
        text("Point circle: the stress state is identical on every section")
            .size(11)
            .color([0.9, 0.5, 0.0])
            .into()
    } else {
        Space::new().height(0).into()
    };

    column![
        text("Calculation Results").size(14),
        Space::new().height(8),
        text(format!("Stresses at α = {:.0}°", input.alpha_deg)).size(12),
        text(format!("Normal stress σα: {:.2} MPa", result.sigma_alpha_mpa)).size(11),
        text(format!("Shear stress τα: {:.2} MPa", result.tau_alpha_mpa)).size(11),
        Space::new().height(12),
        text("Safety Envelope (Extrema)").size(12),
        text(format!("First principal stress σ1: {:.2} MPa", result.sigma_1_mpa)).size(11),
        text(format!("Third principal stress σ3: {:.2} MPa", result.sigma_3_mpa)).size(11),
        text(format!("Maximum shear stress τmax: {:.2} MPa", result.tau_max_mpa))
            .size(11)
            .color([0.8, 0.2, 0.2]),
        Space::new().height(12),
        text("Circle Parameters").size(12),
        text(format!("Center c: {:.2} MPa", result.center_mpa)).size(11),
        text(format!("Radius r: {:.2} MPa", result.radius_mpa)).size(11),
        degenerate_note,
        Space::new().height(15),
        text("Mohr's Circle of Stress").size(14),
        Space::new().height(8),
        canvas_widget,
    ]
}
