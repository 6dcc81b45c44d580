//! Clock theme — a transparent window with a black-and-white face
//!
//! The only color on the face is the red second hand.

use egui::{Color32, Rgba, Visuals};

pub struct ClockColors;

impl ClockColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const RED: Color32 = Color32::from_rgb(255, 0, 0);
    pub const TRANSPARENT: Color32 = Color32::TRANSPARENT;
}

/// Theme configuration for the clock window
pub struct ClockTheme {
    pub readout_font_size: f32,
    /// Horizontal overstrike of the readout, in unscaled points.
    pub readout_weight: f32,
}

impl Default for ClockTheme {
    fn default() -> Self {
        Self {
            readout_font_size: 40.0,
            readout_weight: 1.0,
        }
    }
}

impl ClockTheme {
    /// Apply transparent visuals to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::light();

        visuals.window_fill = ClockColors::TRANSPARENT;
        visuals.panel_fill = ClockColors::TRANSPARENT;
        visuals.faint_bg_color = ClockColors::TRANSPARENT;
        visuals.extreme_bg_color = ClockColors::TRANSPARENT;
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }

    /// Clear color handed to eframe so nothing is drawn behind the face.
    pub fn clear_color() -> [f32; 4] {
        Rgba::TRANSPARENT.to_array()
    }

    /// Panel frame with no fill and no margin.
    pub fn canvas_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(ClockColors::TRANSPARENT)
            .inner_margin(egui::Margin::same(0.0))
    }
}
