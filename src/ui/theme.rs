// LogMonitor - ui/theme.rs
//
// Colour scheme, visuals, and layout constants.
// No dependencies on app state or business logic.

use egui::{Color32, FontId, TextStyle};

/// Fill for the auto-scroll toggle while it is on (light blue).
pub const AUTO_SCROLL_ON_FILL: Color32 = Color32::from_rgb(173, 216, 230);

/// Text colour on top of `AUTO_SCROLL_ON_FILL`.
pub const AUTO_SCROLL_ON_TEXT: Color32 = Color32::from_rgb(17, 24, 39); // Gray 900

/// Badge colour shown while a load is in flight.
pub const LOADING_BADGE: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Layout constants.
pub const FILTER_INPUT_HEIGHT: f32 = 30.0;
pub const CONTROL_SPACING: f32 = 6.0;

/// Apply light/dark visuals and the configured font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        style
            .text_styles
            .insert(TextStyle::Body, FontId::proportional(font_size));
        style
            .text_styles
            .insert(TextStyle::Button, FontId::proportional(font_size));
        style
            .text_styles
            .insert(TextStyle::Monospace, FontId::monospace(font_size - 1.0));
    });
}
