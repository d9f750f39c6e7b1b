//! # MohrLab GUI Application
//!
//! Interactive plane-stress explorer for a material-mechanics course.
//! Built with Iced framework for cross-platform support (Windows, macOS,
//! Linux, WASM) using the Elm architecture (State, Message, Update, View).
//!
//! Adjust the stress state and section angle with the sliders on the left;
//! the computed stresses and the Mohr's circle diagram on the right update
//! on every interaction. Each slider change triggers one full
//! recompute-and-redraw pass; nothing is cached between interactions.

mod ui;

use iced::widget::{column, row};
use iced::{window, Element, Length, Size, Task};

use stress_core::calculations::plane_stress::{calculate, PlaneStressInput, PlaneStressResult};
use stress_core::presets::StressPreset;

/// Messages produced by user interaction.
#[derive(Debug, Clone)]
pub enum Message {
    SigmaXChanged(f64),
    SigmaYChanged(f64),
    TauXyChanged(f64),
    AlphaChanged(f64),
    PresetSelected(StressPreset),
    Reset,
}

/// Application state: the four slider values plus the derived result.
///
/// The result is recomputed from scratch on every input message; it is
/// never mutated in place or carried across interactions.
pub struct App {
    pub input: PlaneStressInput,
    pub selected_preset: Option<StressPreset>,
    pub result: Option<PlaneStressResult>,
    pub error_message: Option<String>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let mut app = Self {
            input: PlaneStressInput::default(),
            selected_preset: Some(StressPreset::WingSkinPanel),
            result: None,
            error_message: None,
        };
        app.recompute();
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        "MohrLab - Plane Stress Explorer".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SigmaXChanged(value) => {
                self.input.sigma_x_mpa = value;
                self.selected_preset = None;
            }
            Message::SigmaYChanged(value) => {
                self.input.sigma_y_mpa = value;
                self.selected_preset = None;
            }
            Message::TauXyChanged(value) => {
                self.input.tau_xy_mpa = value;
                self.selected_preset = None;
            }
            Message::AlphaChanged(value) => {
                // Presets fix the stress state, not the section angle
                self.input.alpha_deg = value;
            }
            Message::PresetSelected(preset) => {
                self.input = preset.input();
                self.selected_preset = Some(preset);
            }
            Message::Reset => {
                self.input = PlaneStressInput::default();
                self.selected_preset = Some(StressPreset::WingSkinPanel);
            }
        }

        self.recompute();
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let panels = row![
            ui::input_panel::view_input_panel(self, 0.35),
            ui::results_panel::view_results_panel(self, 0.35),
        ]
        .spacing(5)
        .height(Length::Fill);

        column![
            panels,
            ui::status_bar::view_status_bar(&self.input, self.result.as_ref()),
        ]
        .padding(8)
        .spacing(4)
        .into()
    }

    /// One full evaluate pass over the current inputs.
    fn recompute(&mut self) {
        match calculate(&self.input) {
            Ok(result) => {
                self.result = Some(result);
                self.error_message = None;
            }
            Err(e) => {
                self.result = None;
                self.error_message = Some(e.to_string());
            }
        }
    }
}

pub fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: Size::new(1100.0, 720.0),
            min_size: Some(Size::new(900.0, 600.0)),
            ..Default::default()
        })
        .run()
}
