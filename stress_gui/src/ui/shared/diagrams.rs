//! Canvas drawing utilities for the Mohr's circle diagram
//!
//! Renders the circle in normal-stress/shear-stress coordinates with the
//! σ and τ axes, the current state point for the chosen section angle, the
//! radius line from the center, and the two principal-stress points.

use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use stress_core::calculations::plane_stress::PlaneStressResult;

use crate::Message;

/// Data needed to draw the circle diagram
pub struct MohrDiagramData {
    pub center_mpa: f64,
    pub radius_mpa: f64,
    pub state_point: (f64, f64),
    pub sigma_1_mpa: f64,
    pub sigma_3_mpa: f64,
    /// Half-width of the square view window (never zero, guarded upstream)
    pub view_extent: f64,
    pub alpha_deg: f64,
}

impl MohrDiagramData {
    pub fn from_result(result: &PlaneStressResult, alpha_deg: f64) -> Self {
        Self {
            center_mpa: result.center_mpa,
            radius_mpa: result.radius_mpa,
            state_point: result.circle.state_point,
            sigma_1_mpa: result.sigma_1_mpa,
            sigma_3_mpa: result.sigma_3_mpa,
            view_extent: result.circle.view_extent,
            alpha_deg,
        }
    }
}

/// Canvas program for drawing the Mohr's circle
pub struct MohrDiagram {
    data: MohrDiagramData,
}

/// Maps stress coordinates (σ, τ) to screen points with equal aspect.
///
/// The view window is the square [c - E, c + E] x [-E, E] in MPa, matching
/// the circle's own center, so the circle never drifts off screen.
struct PlotFrame {
    origin: Point,
    half_px: f32,
    center_mpa: f64,
    extent_mpa: f64,
}

impl PlotFrame {
    fn new(bounds_width: f32, bounds_height: f32, center_mpa: f64, extent_mpa: f64) -> Self {
        let margin = 24.0;
        let half_px = ((bounds_width.min(bounds_height)) / 2.0 - margin).max(10.0);
        Self {
            origin: Point::new(bounds_width / 2.0, bounds_height / 2.0),
            half_px,
            center_mpa,
            extent_mpa,
        }
    }

    fn to_screen(&self, sigma: f64, tau: f64) -> Point {
        let dx = ((sigma - self.center_mpa) / self.extent_mpa) as f32 * self.half_px;
        let dy = (tau / self.extent_mpa) as f32 * self.half_px;
        Point::new(self.origin.x + dx, self.origin.y - dy)
    }

    /// True when a stress abscissa falls inside the view window
    fn contains_sigma(&self, sigma: f64) -> bool {
        (sigma - self.center_mpa).abs() <= self.extent_mpa
    }
}

impl MohrDiagram {
    pub fn new(data: MohrDiagramData) -> Self {
        Self { data }
    }

    fn draw_axes(&self, frame: &mut Frame, plot: &PlotFrame, color: Color) {
        // σ axis (τ = 0) spans the window
        let left = plot.to_screen(plot.center_mpa - plot.extent_mpa, 0.0);
        let right = plot.to_screen(plot.center_mpa + plot.extent_mpa, 0.0);
        let sigma_axis = Path::line(left, right);
        frame.stroke(&sigma_axis, Stroke::default().with_color(color).with_width(1.0));

        // τ axis (σ = 0), only when the origin is inside the window
        if plot.contains_sigma(0.0) {
            let bottom = plot.to_screen(0.0, -plot.extent_mpa);
            let top = plot.to_screen(0.0, plot.extent_mpa);
            let tau_axis = Path::line(bottom, top);
            frame.stroke(&tau_axis, Stroke::default().with_color(color).with_width(1.0));
        }

        // Axis labels
        let sigma_label = Text {
            content: "σ (MPa)".to_string(),
            position: Point::new(right.x - 48.0, right.y + 6.0),
            color,
            size: iced::Pixels(10.0),
            ..Text::default()
        };
        frame.fill_text(sigma_label);

        let top = plot.to_screen(plot.center_mpa, plot.extent_mpa);
        let tau_label = Text {
            content: "τ (MPa)".to_string(),
            position: Point::new(top.x + 6.0, top.y),
            color,
            size: iced::Pixels(10.0),
            ..Text::default()
        };
        frame.fill_text(tau_label);
    }

    fn draw_circle(&self, frame: &mut Frame, plot: &PlotFrame, color: Color) {
        let center = plot.to_screen(self.data.center_mpa, 0.0);
        let radius_px = (self.data.radius_mpa / plot.extent_mpa) as f32 * plot.half_px;

        if radius_px > 0.5 {
            let circle = Path::circle(center, radius_px);
            let dashed = Stroke {
                line_dash: LineDash {
                    segments: &[6.0, 4.0],
                    offset: 0,
                },
                ..Stroke::default().with_color(color).with_width(1.5)
            };
            frame.stroke(&circle, dashed);
        } else {
            // Point circle: mark the degenerate state
            let dot = Path::circle(center, 3.0);
            frame.fill(&dot, color);
        }

        // Center tick and label
        let tick = Path::circle(center, 2.0);
        frame.fill(&tick, color);
        let center_label = Text {
            content: format!("c = {:.1}", self.data.center_mpa),
            position: Point::new(center.x + 5.0, center.y + 8.0),
            color,
            size: iced::Pixels(9.0),
            ..Text::default()
        };
        frame.fill_text(center_label);
    }

    fn draw_state_point(&self, frame: &mut Frame, plot: &PlotFrame, color: Color) {
        let (sigma_alpha, tau_alpha) = self.data.state_point;
        let center = plot.to_screen(self.data.center_mpa, 0.0);
        let state = plot.to_screen(sigma_alpha, tau_alpha);

        // Radius line from the center to the current state
        let radius_line = Path::line(center, state);
        frame.stroke(&radius_line, Stroke::default().with_color(color).with_width(1.5));

        let point = Path::circle(state, 4.0);
        frame.fill(&point, color);

        let label = Text {
            content: format!("Current (α = {:.0}°)", self.data.alpha_deg),
            position: Point::new(state.x + 7.0, state.y - 5.0),
            color,
            size: iced::Pixels(9.0),
            ..Text::default()
        };
        frame.fill_text(label);
    }

    fn draw_principal_points(&self, frame: &mut Frame, plot: &PlotFrame, color: Color) {
        for (value, name) in [
            (self.data.sigma_1_mpa, "σ1"),
            (self.data.sigma_3_mpa, "σ3"),
        ] {
            let point = plot.to_screen(value, 0.0);
            let marker = Path::circle(point, 3.0);
            frame.fill(&marker, color);

            let label = Text {
                content: format!("{} = {:.1}", name, value),
                position: Point::new(point.x - 18.0, point.y - 18.0),
                color,
                size: iced::Pixels(9.0),
                ..Text::default()
            };
            frame.fill_text(label);
        }
    }
}

impl canvas::Program<Message> for MohrDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let plot = PlotFrame::new(
            bounds.width,
            bounds.height,
            self.data.center_mpa,
            self.data.view_extent,
        );

        // Colors
        let axis_color = Color::from_rgb(0.5, 0.5, 0.5);
        let circle_color = Color::from_rgb(0.2, 0.4, 0.8);
        let state_color = Color::from_rgb(0.8, 0.2, 0.2);
        let principal_color = Color::from_rgb(0.2, 0.6, 0.2);

        self.draw_axes(&mut frame, &plot, axis_color);
        self.draw_circle(&mut frame, &plot, circle_color);
        self.draw_principal_points(&mut frame, &plot, principal_color);
        self.draw_state_point(&mut frame, &plot, state_color);

        vec![frame.into_geometry()]
    }
}
