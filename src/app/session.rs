// LogMonitor - app/session.rs
//
// Session context: everything one monitoring session knows about the file
// being watched and the view onto it. Owned by `AppState`, passed explicitly
// into load requests and scroll reconciliation.
//
// Rules:
//   - Content is only ever replaced wholesale by `apply_result`.
//   - The scroll offset is captured before the replacement, never after.
//   - A result for a path other than the current one is stale and ignored.

use crate::core::model::{LoadRequest, LoadResult};
use crate::core::scroll::{self, ScrollTarget};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// State of one monitoring session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// File currently being monitored. None until the user picks one.
    pub file_path: Option<PathBuf>,

    /// Filter text as shown in the input field. Read at every poll tick.
    pub filter: String,

    /// When true, each update forces the view to the bottom.
    pub auto_scroll: bool,

    /// Last vertical scroll offset reported by the log view.
    pub scroll_offset: f32,

    /// Currently displayed block.
    pub content: String,

    /// Number of lines in `content`.
    pub line_count: usize,

    /// When `content` was last replaced.
    pub last_refresh: Option<DateTime<Local>>,

    /// Scroll target the log view must apply on its next frame.
    pending_scroll: Option<ScrollTarget>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            file_path: None,
            filter: String::new(),
            auto_scroll: true,
            scroll_offset: 0.0,
            content: String::new(),
            line_count: 0,
            last_refresh: None,
            pending_scroll: None,
        }
    }
}

impl SessionContext {
    /// Create an empty session with auto-scroll on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a file has been selected.
    pub fn has_file(&self) -> bool {
        self.file_path.is_some()
    }

    /// Switch monitoring to `path`.
    ///
    /// The displayed content is left alone: if the new path cannot be read
    /// the previous view persists.
    pub fn select_file(&mut self, path: PathBuf) {
        tracing::info!(file = %path.display(), "Monitoring file selected");
        self.file_path = Some(path);
    }

    /// Flip auto-scroll. Does not trigger a reload. Returns the new value.
    pub fn toggle_auto_scroll(&mut self) -> bool {
        self.auto_scroll = !self.auto_scroll;
        tracing::debug!(auto_scroll = self.auto_scroll, "Auto-scroll toggled");
        self.auto_scroll
    }

    /// Snapshot the session for a worker. None when no file is selected.
    pub fn load_request(&self) -> Option<LoadRequest> {
        self.file_path.as_ref().map(|path| LoadRequest {
            path: path.clone(),
            filter: self.filter.clone(),
            auto_scroll: self.auto_scroll,
        })
    }

    /// Record the offset the log view is currently scrolled to.
    pub fn record_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    /// True if `path` is the file this session is monitoring.
    pub fn is_current(&self, path: &Path) -> bool {
        self.file_path.as_deref() == Some(path)
    }

    /// Replace the displayed content with a worker result.
    ///
    /// Returns false (and changes nothing) if the result is for a file that
    /// is no longer selected.
    pub fn apply_result(&mut self, result: LoadResult) -> bool {
        if !self.is_current(&result.path) {
            tracing::debug!(
                file = %result.path.display(),
                "Discarding result for a file that is no longer selected"
            );
            return false;
        }

        let captured = self.scroll_offset;
        self.content = result.content;
        self.line_count = result.line_count;
        self.last_refresh = Some(Local::now());
        self.pending_scroll = Some(scroll::reconcile(captured, result.auto_scroll));
        true
    }

    /// Scroll target left by the last `apply_result`, if not yet consumed.
    pub fn pending_scroll(&self) -> Option<ScrollTarget> {
        self.pending_scroll
    }

    /// Take the pending scroll target, leaving none.
    pub fn take_pending_scroll(&mut self) -> Option<ScrollTarget> {
        self.pending_scroll.take()
    }
}
