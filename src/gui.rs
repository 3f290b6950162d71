// LogMonitor - gui.rs
//
// Top-level eframe::App implementation.
// Drives the poll loop each frame and wires together the UI panels.

use crate::app::monitor::{Monitor, TickAction};
use crate::app::state::AppState;
use crate::ui;
use crate::util::constants;
use std::time::{Duration, Instant};

/// Repaint cadence while a load is outstanding, so its result is applied
/// promptly even when the poll interval is long.
const IN_FLIGHT_REPAINT: Duration = Duration::from_millis(16);

/// The LogMonitor application.
pub struct LogMonitorApp {
    pub state: AppState,
    pub monitor: Monitor,
    /// Visuals must be (re)applied on the first frame and after a theme change.
    applied_theme: Option<(bool, f32)>,
}

impl LogMonitorApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, poll_interval: Duration) -> Self {
        Self {
            state,
            monitor: Monitor::new(poll_interval),
            applied_theme: None,
        }
    }

    fn pick_file(&mut self) {
        let dialog = rfd::FileDialog::new()
            .set_title("Choose Log File")
            .add_filter("Log Files", constants::SUGGESTED_LOG_EXTENSIONS)
            .add_filter("All Files", &["*"]);
        if let Some(path) = dialog.pick_file() {
            self.state.open_file(path);
        }
    }
}

impl eframe::App for LogMonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = (self.state.dark_mode, self.state.font_size);
        if self.applied_theme != Some(theme) {
            ui::theme::apply(ctx, theme.0, theme.1);
            self.applied_theme = Some(theme);
        }

        // ---- Results first, so this frame renders the newest content ----
        self.monitor.drain(&mut self.state);

        // ---- Handle flags set by panels ----
        if self.state.request_open_file {
            self.state.request_open_file = false;
            self.pick_file();
        }
        if self.state.request_clear {
            self.state.request_clear = false;
            self.state.clear_file();
        }

        // ---- Poll tick ----
        let now = Instant::now();
        if self.monitor.tick(&mut self.state, now) == TickAction::Skipped {
            tracing::trace!("Poll tick skipped: previous load still running");
        }

        // egui only runs frames on demand; keep the timer alive.
        let wakeup = if self.monitor.is_loading() || self.state.reload_requested {
            IN_FLIGHT_REPAINT
        } else {
            self.monitor.next_wakeup(now)
        };
        ctx.request_repaint_after(wakeup);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open File\u{2026}").clicked() {
                        self.state.request_open_file = true;
                        ui.close_menu();
                    }
                    let has_file = self.state.session.has_file();
                    if ui
                        .add_enabled(has_file, egui::Button::new("Clear File"))
                        .clicked()
                    {
                        self.state.request_clear = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui
                        .checkbox(&mut self.state.session.auto_scroll, "Auto-scroll")
                        .changed()
                    {
                        ui.close_menu();
                    }
                    if ui.checkbox(&mut self.state.dark_mode, "Dark mode").changed() {
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.monitor.is_loading() {
                    ui.label(
                        egui::RichText::new(" \u{25cf} ")
                            .strong()
                            .color(ui::theme::LOADING_BADGE),
                    );
                }
                let status = ui.label(&self.state.status_message);
                if !self.state.warnings.is_empty() {
                    status.on_hover_text(self.state.warnings.join("\n"));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(at) = self.state.session.last_refresh {
                        ui.label(format!("updated {}", at.format("%H:%M:%S")));
                        ui.separator();
                    }
                    if self.state.session.has_file() {
                        ui.label(format!(
                            "{} line(s) shown (max {})",
                            self.state.session.line_count,
                            constants::TAIL_LINE_CAPACITY
                        ));
                    }
                });
            });
        });

        // Controls (filter + buttons)
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui::panels::controls::render(ui, &mut self.state);
        });

        // Central panel (log text)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::log_view::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
