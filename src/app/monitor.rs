// LogMonitor - app/monitor.rs
//
// Poll loop controller: decides each frame whether to start a load, and
// folds finished loads back into the session. Kept free of egui so the
// whole tick -> load -> apply cycle can be driven from tests.

use crate::app::poller::Poller;
use crate::app::state::AppState;
use crate::app::tail::TailManager;
use crate::core::model::LoadOutcome;
use std::time::{Duration, Instant};

/// What `Monitor::tick` did this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Nothing was due, or no file is selected.
    Idle,
    /// A background load was started.
    Started,
    /// A load was due but one is still in flight; not queued.
    Skipped,
}

/// Owns the poll timer and the background loader for one session.
pub struct Monitor {
    poller: Poller,
    tail: TailManager,
}

impl Monitor {
    pub fn new(interval: Duration) -> Self {
        Self {
            poller: Poller::new(interval),
            tail: TailManager::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.poller.interval()
    }

    pub fn is_loading(&self) -> bool {
        self.tail.is_in_flight()
    }

    /// Fire a load if the timer is due or a reload was requested.
    pub fn tick(&mut self, state: &mut AppState, now: Instant) -> TickAction {
        let timer_due = self.poller.poll(now);
        if !timer_due && !state.reload_requested {
            return TickAction::Idle;
        }

        let Some(request) = state.session.load_request() else {
            state.reload_requested = false;
            return TickAction::Idle;
        };

        if self.tail.start_load(request) {
            state.reload_requested = false;
            TickAction::Started
        } else {
            // An explicit reload stays pending until the slot frees.
            TickAction::Skipped
        }
    }

    /// Apply the in-flight outcome if it has arrived. Returns true if the
    /// displayed content changed.
    pub fn drain(&mut self, state: &mut AppState) -> bool {
        match self.tail.poll_outcome() {
            Some(outcome) => apply_outcome(state, outcome),
            None => false,
        }
    }

    /// Like `drain`, but blocks up to `timeout` for the outcome.
    pub fn drain_blocking(&mut self, state: &mut AppState, timeout: Duration) -> bool {
        match self.tail.wait_outcome(timeout) {
            Some(outcome) => apply_outcome(state, outcome),
            None => false,
        }
    }

    /// How long the UI may sleep before the next frame is needed.
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        self.poller.time_until_due(now)
    }
}

fn apply_outcome(state: &mut AppState, outcome: LoadOutcome) -> bool {
    match outcome {
        LoadOutcome::Loaded(result) => state.session.apply_result(result),
        LoadOutcome::Skipped(_) => false,
    }
}
