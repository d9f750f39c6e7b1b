//! Input Panel (Left)
//!
//! Displays:
//! - Preset picker seeding the sliders with named stress states
//! - Stress-state sliders: σx, σy ∈ [-200, 200] MPa, τxy ∈ [-100, 100] MPa
//! - Section rotation slider: α ∈ [0°, 180°]
//! - Reset button restoring the wing-skin default
//!
//! Slider bounds and the 1-unit step are a UI convention; the computation in
//! stress_core is correct for any finite values.

use std::ops::RangeInclusive;

use iced::widget::{
    button, column, container, pick_list, row, scrollable, slider, text, Column, Space,
};
use iced::{Element, Length, Padding};

use stress_core::presets::StressPreset;

use crate::{App, Message};

/// Render the input panel
///
/// The `ratio` parameter determines the relative size of this panel vs the
/// results panel. A ratio of 0.5 means equal sizes.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let preset_section = column![
        text("Stress-State Presets").size(14),
        Space::new().height(8),
        pick_list(
            &StressPreset::ALL[..],
            app.selected_preset,
            Message::PresetSelected
        )
        .width(Length::Fill)
        .text_size(11),
    ]
    .spacing(4);

    let stress_section = column![
        text("Reference-Section Stresses").size(14),
        text("Units: MPa").size(10).color([0.5, 0.5, 0.5]),
        Space::new().height(8),
        labeled_slider(
            "Normal stress σx:",
            app.input.sigma_x_mpa,
            -200.0..=200.0,
            "MPa",
            Message::SigmaXChanged,
        ),
        labeled_slider(
            "Normal stress σy:",
            app.input.sigma_y_mpa,
            -200.0..=200.0,
            "MPa",
            Message::SigmaYChanged,
        ),
        labeled_slider(
            "Shear stress τxy:",
            app.input.tau_xy_mpa,
            -100.0..=100.0,
            "MPa",
            Message::TauXyChanged,
        ),
    ]
    .spacing(6);

    let rotation_section = column![
        text("Section Rotation").size(14),
        text("Rotate the cut and watch the state point travel the circle")
            .size(10)
            .color([0.5, 0.5, 0.5]),
        Space::new().height(8),
        labeled_slider(
            "Section angle α:",
            app.input.alpha_deg,
            0.0..=180.0,
            "°",
            Message::AlphaChanged,
        ),
    ]
    .spacing(6);

    let actions = button("Reset to Default")
        .on_press(Message::Reset)
        .padding(Padding::from([6, 12]));

    let panel: Column<'_, Message> = column![
        preset_section,
        Space::new().height(15),
        stress_section,
        Space::new().height(15),
        rotation_section,
        Space::new().height(15),
        actions,
    ];

    // Convert ratio to fill portion (scale to 0-100 for better precision)
    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// A slider row with its label and live value readout
fn labeled_slider<'a>(
    label: &'a str,
    value: f64,
    range: RangeInclusive<f64>,
    unit: &'a str,
    on_change: fn(f64) -> Message,
) -> Element<'a, Message> {
    column![
        row![
            text(label).size(11),
            Space::new().width(Length::Fill),
            text(format!("{:.0} {}", value, unit)).size(11),
        ],
        slider(range, value, on_change).step(1.0),
    ]
    .spacing(2)
    .into()
}
