// LogMonitor - ui/panels/log_view.rs
//
// Scrollable read-only view of the filtered tail.
//
// Scroll handling: every frame records the view's offset into the session,
// so the offset captured by `apply_result` is the one the user last saw.
// On the first frame after a replacement the pending `ScrollTarget` is
// applied: `Bottom` scrolls to the end of the text, `Offset` restores the
// captured position (egui clamps it if the content got shorter).

use crate::app::state::AppState;
use crate::core::scroll::ScrollTarget;

/// Render the log view (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.session.has_file() {
        ui.centered_and_justified(|ui| {
            ui.label("No file selected.\nUse Open File\u{2026} to pick a log to monitor.");
        });
        return;
    }

    let pending = state.session.take_pending_scroll();

    let mut area = egui::ScrollArea::vertical()
        .id_salt("log_view")
        .auto_shrink([false; 2]);
    if let Some(ScrollTarget::Offset(offset)) = pending {
        area = area.vertical_scroll_offset(offset);
    }

    let content = state.session.content.as_str();
    let output = area.show(ui, |ui| {
        let mut text = content;
        ui.add(
            egui::TextEdit::multiline(&mut text)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY)
                .frame(false),
        );
        if pending == Some(ScrollTarget::Bottom) {
            ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
        }
    });

    let offset = match pending {
        Some(target) => {
            let max = output.content_size.y - output.inner_rect.height();
            target.resolve(max)
        }
        None => output.state.offset.y,
    };
    state.session.record_scroll_offset(offset);
}
