// LogMonitor - app/state.rs
//
// Application state management. Holds the monitoring session, display
// preferences, and request flags set by UI panels.
// Owned by the eframe::App implementation.

use crate::app::session::SessionContext;
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::constants;
use std::path::PathBuf;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The monitoring session.
    pub session: SessionContext,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (config problems and the like).
    pub warnings: Vec<String>,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Whether the About dialog is open.
    pub show_about: bool,

    /// A panel asked for the open-file dialog.
    pub request_open_file: bool,

    /// A panel asked for the current file to be cleared.
    pub request_clear: bool,

    /// A reload should run as soon as the load slot is free, independent of
    /// the poll timer. Set by file selection and the clear action.
    pub reload_requested: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state from validated configuration.
    pub fn new(config: &AppConfig, debug_mode: bool) -> Self {
        Self {
            session: SessionContext::new(),
            status_message: "Ready. Open a log file to begin monitoring.".to_string(),
            warnings: Vec::new(),
            dark_mode: config.dark_mode,
            font_size: config.font_size,
            show_about: false,
            request_open_file: false,
            request_clear: false,
            reload_requested: false,
            debug_mode,
        }
    }

    /// Start monitoring `path` and reload it straight away.
    pub fn open_file(&mut self, path: PathBuf) {
        self.status_message = format!("Monitoring {}", path.display());
        self.session.select_file(path);
        self.reload_requested = true;
    }

    /// Truncate the monitored file, then reload it straight away.
    ///
    /// With no file selected this does nothing. A failed truncate is logged
    /// and otherwise ignored; the next tick shows whatever the file holds.
    pub fn clear_file(&mut self) {
        let Some(path) = self.session.file_path.clone() else {
            return;
        };
        match fs::truncate_file(&path) {
            Ok(()) => tracing::info!(file = %path.display(), "File cleared"),
            Err(e) => tracing::warn!(error = %e, "Clear failed"),
        }
        self.reload_requested = true;
    }

    /// Record a non-fatal warning, keeping at most `MAX_WARNINGS`.
    pub fn push_warning(&mut self, message: String) {
        tracing::warn!("{}", message);
        if self.warnings.len() >= constants::MAX_WARNINGS {
            self.warnings.remove(0);
        }
        self.warnings.push(message);
    }
}
