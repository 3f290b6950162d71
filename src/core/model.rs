// LogMonitor - core/model.rs
//
// Messages exchanged between the UI thread and the load worker.

use crate::util::error::FileError;
use std::path::PathBuf;

/// Snapshot of the session taken on the UI thread when a poll tick fires.
///
/// The worker only ever sees this owned copy, never the live session.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    /// File to read.
    pub path: PathBuf,
    /// Filter text as typed; trimming happens in `TailFilter`.
    pub filter: String,
    /// Auto-scroll flag at request time, returned unchanged in the result.
    pub auto_scroll: bool,
}

/// Output of one successful tail-and-filter pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    /// File that was read.
    pub path: PathBuf,
    /// Retained lines joined with `\n`.
    pub content: String,
    /// Number of retained lines.
    pub line_count: usize,
    /// Copied from the request.
    pub auto_scroll: bool,
}

/// Message sent from the load worker back to the UI thread.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was read; the display should be replaced.
    Loaded(LoadResult),
    /// The file could not be read; the display keeps its previous content.
    Skipped(FileError),
}

impl LoadOutcome {
    /// Path the outcome refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Loaded(result) => &result.path,
            Self::Skipped(err) => err.path(),
        }
    }
}
