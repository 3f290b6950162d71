// LogMonitor - app/tail.rs
//
// Off-UI-thread tail-and-filter.
//
// Architecture:
//   - `TailManager` lives on the UI thread; each accepted request spawns one
//     short-lived thread running `run_tail_load`, which sends a single
//     `LoadOutcome` back over an mpsc channel and exits.
//   - The UI thread polls the channel each frame (non-blocking).
//   - Single-slot guard: while one load is in flight, further requests are
//     refused rather than queued, so results always arrive in request order.
//
// Failure handling:
//   - Open and read errors become `LoadOutcome::Skipped`; the display keeps
//     its previous content and the next tick simply tries again.
//   - A worker that dies without sending frees the slot with a warning.
//
// Each load re-reads the whole file. Tracking a byte offset and scanning only
// appended data would be cheaper for large files.

use crate::core::model::{LoadOutcome, LoadRequest, LoadResult};
use crate::core::tail::{self, TailFilter};
use crate::platform::fs;
use crate::util::error::FileError;
use std::sync::mpsc;
use std::time::Duration;

/// Manages at most one in-flight background load.
pub struct TailManager {
    /// Receiver for the outstanding load, if any.
    in_flight: Option<mpsc::Receiver<LoadOutcome>>,
}

impl TailManager {
    pub fn new() -> Self {
        Self { in_flight: None }
    }

    /// Returns `true` while a load thread has not yet reported back.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a background load for `request`.
    ///
    /// Returns `false` without spawning anything if a load is already in
    /// flight.
    pub fn start_load(&mut self, request: LoadRequest) -> bool {
        if self.in_flight.is_some() {
            tracing::trace!(file = %request.path.display(), "Load already in flight; tick skipped");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        self.in_flight = Some(rx);

        tracing::trace!(file = %request.path.display(), "Load started");
        std::thread::spawn(move || {
            let outcome = run_tail_load(&request);
            // Receiver dropped means the app is shutting down.
            let _ = tx.send(outcome);
        });
        true
    }

    /// Take the outcome of the in-flight load if it has arrived.
    pub fn poll_outcome(&mut self) -> Option<LoadOutcome> {
        let rx = self.in_flight.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.in_flight = None;
                Some(outcome)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                tracing::warn!("Load thread exited without a result");
                self.in_flight = None;
                None
            }
        }
    }

    /// Block up to `timeout` for the in-flight outcome.
    pub fn wait_outcome(&mut self, timeout: Duration) -> Option<LoadOutcome> {
        let rx = self.in_flight.as_ref()?;
        match rx.recv_timeout(timeout) {
            Ok(outcome) => {
                self.in_flight = None;
                Some(outcome)
            }
            Err(mpsc::RecvTimeoutError::Timeout) => None,
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                tracing::warn!("Load thread exited without a result");
                self.in_flight = None;
                None
            }
        }
    }
}

impl Default for TailManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Read `request.path` and produce its filtered tail.
///
/// Runs synchronously; `TailManager` calls it on a worker thread.
pub fn run_tail_load(request: &LoadRequest) -> LoadOutcome {
    let reader = match fs::open_for_read(&request.path) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = %e, "Load skipped");
            return LoadOutcome::Skipped(e);
        }
    };

    let filter = TailFilter::new(&request.filter);
    let lines = match tail::tail_lines(reader, &filter) {
        Ok(lines) => lines,
        Err(source) => {
            let e = FileError::Read {
                path: request.path.clone(),
                source,
            };
            tracing::warn!(error = %e, "Load skipped");
            return LoadOutcome::Skipped(e);
        }
    };

    tracing::trace!(
        file = %request.path.display(),
        lines = lines.len(),
        filtered = !filter.is_empty(),
        "Load complete"
    );

    LoadOutcome::Loaded(LoadResult {
        path: request.path.clone(),
        line_count: lines.len(),
        content: lines.join("\n"),
        auto_scroll: request.auto_scroll,
    })
}
