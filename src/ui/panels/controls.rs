// LogMonitor - ui/panels/controls.rs
//
// Control strip under the log view: filter input, open/clear buttons and
// the auto-scroll toggle. Buttons only set request flags on `AppState`;
// the app loop performs the actual work.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the control strip.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(theme::CONTROL_SPACING);

    // The filter is read at every poll tick; editing it never forces a reload.
    ui.add_sized(
        [ui.available_width(), theme::FILTER_INPUT_HEIGHT],
        egui::TextEdit::singleline(&mut state.session.filter)
            .hint_text("Filter (case-insensitive)\u{2026}")
            .vertical_align(egui::Align::Center),
    );

    ui.add_space(theme::CONTROL_SPACING);

    ui.horizontal(|ui| {
        if ui.button("Open File\u{2026}").clicked() {
            state.request_open_file = true;
        }

        let has_file = state.session.has_file();
        if ui
            .add_enabled(has_file, egui::Button::new("Clear File"))
            .on_hover_text("Truncate the monitored file to empty")
            .clicked()
        {
            state.request_clear = true;
        }

        let auto = state.session.auto_scroll;
        let label = egui::RichText::new("Scroll to Bottom");
        let button = if auto {
            egui::Button::new(label.color(theme::AUTO_SCROLL_ON_TEXT))
                .fill(theme::AUTO_SCROLL_ON_FILL)
        } else {
            egui::Button::new(label)
        };
        if ui
            .add(button)
            .on_hover_text("Keep the view pinned to the newest line")
            .clicked()
        {
            state.session.toggle_auto_scroll();
        }
    });

    ui.add_space(theme::CONTROL_SPACING);
}
