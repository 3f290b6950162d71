// LogMonitor - tests/e2e_tail.rs
//
// End-to-end tests for the poll -> load -> apply cycle.
//
// These tests exercise the real filesystem (tempfile), the real worker
// thread and channel, and the real session bookkeeping. No mocks.

use logmonitor::app::monitor::{Monitor, TickAction};
use logmonitor::app::state::AppState;
use logmonitor::app::tail::run_tail_load;
use logmonitor::core::model::{LoadOutcome, LoadRequest};
use logmonitor::core::scroll::ScrollTarget;
use logmonitor::platform::config::AppConfig;
use logmonitor::util::constants::TAIL_LINE_CAPACITY;
use std::path::Path;
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

const WAIT: Duration = Duration::from_secs(5);

fn new_state() -> AppState {
    AppState::new(&AppConfig::default(), false)
}

/// Run one full reload cycle and wait for its result to be applied.
fn reload(monitor: &mut Monitor, state: &mut AppState) -> bool {
    state.reload_requested = true;
    assert_eq!(monitor.tick(state, Instant::now()), TickAction::Started);
    monitor.drain_blocking(state, WAIT)
}

fn load(path: &Path, filter: &str) -> String {
    let request = LoadRequest {
        path: path.to_path_buf(),
        filter: filter.to_string(),
        auto_scroll: true,
    };
    match run_tail_load(&request) {
        LoadOutcome::Loaded(result) => result.content,
        LoadOutcome::Skipped(e) => panic!("load skipped: {e}"),
    }
}

fn write_lines(path: &Path, lines: impl IntoIterator<Item = String>) {
    let body: String = lines.into_iter().map(|l| l + "\n").collect();
    std::fs::write(path, body).unwrap();
}

// =============================================================================
// Tail-and-filter over real files
// =============================================================================

/// 150 lines, two WARN lines, lowercase filter: exactly those two, in order.
#[test]
fn e2e_filter_finds_sparse_matches_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    write_lines(
        &path,
        (1..=150).map(|i| {
            if i == 10 || i == 140 {
                format!("{i} WARN low disk")
            } else {
                format!("{i} INFO tick")
            }
        }),
    );

    let out = load(&path, "warn");
    assert_eq!(out, "10 WARN low disk\n140 WARN low disk");
}

/// With more matches than the cap, exactly the last 100 are kept.
#[test]
fn e2e_matches_capped_to_trailing_window() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    write_lines(&path, (1..=400).map(|i| format!("entry {i}")));

    let out = load(&path, "");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), TAIL_LINE_CAPACITY);
    assert_eq!(lines[0], "entry 301");
    assert_eq!(lines[99], "entry 400");
}

/// Empty filter on a short file reproduces the file.
#[test]
fn e2e_empty_filter_returns_file_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    std::fs::write(&path, "alpha\nbeta\ngamma\n").unwrap();
    assert_eq!(load(&path, ""), "alpha\nbeta\ngamma");
}

#[test]
fn e2e_uppercase_filter_matches_lowercase_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    std::fs::write(&path, "all good\nan error occurred\n").unwrap();
    assert_eq!(load(&path, "ERROR"), "an error occurred");
}

#[test]
fn e2e_empty_file_gives_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.log");
    std::fs::write(&path, "").unwrap();
    assert_eq!(load(&path, ""), "");
}

// =============================================================================
// Full cycle through Monitor + AppState
// =============================================================================

/// Clearing the file yields an empty display on the following reload.
#[test]
fn e2e_clear_then_reload_shows_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    std::fs::write(&path, "one\ntwo\n").unwrap();

    let mut monitor = Monitor::new(Duration::from_secs(60));
    let mut state = new_state();
    state.open_file(path);
    assert!(reload(&mut monitor, &mut state));
    assert_eq!(state.session.content, "one\ntwo");

    state.clear_file();
    assert!(state.reload_requested);
    assert_eq!(monitor.tick(&mut state, Instant::now()), TickAction::Started);
    assert!(monitor.drain_blocking(&mut state, WAIT));
    assert_eq!(state.session.content, "");
    assert_eq!(state.session.line_count, 0);
}

/// Switching to a nonexistent file keeps the previous content on screen.
#[test]
fn e2e_nonexistent_selection_keeps_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    std::fs::write(&path, "still here\n").unwrap();

    let mut monitor = Monitor::new(Duration::from_secs(60));
    let mut state = new_state();
    state.open_file(path);
    assert!(reload(&mut monitor, &mut state));
    let before = state.session.last_refresh;

    state.open_file(dir.path().join("does-not-exist.log"));
    assert!(!reload(&mut monitor, &mut state));
    assert_eq!(state.session.content, "still here");
    assert_eq!(state.session.last_refresh, before);
}

/// Appended lines show up on the next poll; the display is fully replaced.
#[test]
fn e2e_growing_file_is_picked_up_on_next_tick() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    std::fs::write(&path, "first\n").unwrap();

    let interval = Duration::from_millis(100);
    let mut monitor = Monitor::new(interval);
    let mut state = new_state();
    state.open_file(path.clone());

    let t0 = Instant::now();
    assert_eq!(monitor.tick(&mut state, t0), TickAction::Started);
    assert!(monitor.drain_blocking(&mut state, WAIT));
    assert_eq!(state.session.content, "first");

    std::fs::write(&path, "first\nsecond\n").unwrap();
    assert_eq!(monitor.tick(&mut state, t0 + interval / 2), TickAction::Idle);
    assert_eq!(monitor.tick(&mut state, t0 + interval), TickAction::Started);
    assert!(monitor.drain_blocking(&mut state, WAIT));
    assert_eq!(state.session.content, "first\nsecond");
}

/// The filter is read at tick time, not when the file was selected.
#[test]
fn e2e_filter_change_applies_on_next_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    std::fs::write(&path, "INFO a\nERROR b\nINFO c\n").unwrap();

    let mut monitor = Monitor::new(Duration::from_secs(60));
    let mut state = new_state();
    state.open_file(path);
    assert!(reload(&mut monitor, &mut state));
    assert_eq!(state.session.line_count, 3);

    state.session.filter = " error ".to_string();
    assert!(reload(&mut monitor, &mut state));
    assert_eq!(state.session.content, "ERROR b");
}

/// Auto-scroll on pins to bottom; off restores the offset seen before the update.
#[test]
fn e2e_scroll_reconciliation_follows_auto_scroll_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    write_lines(&path, (1..=50).map(|i| format!("line {i}")));

    let mut monitor = Monitor::new(Duration::from_secs(60));
    let mut state = new_state();
    state.open_file(path);

    state.session.record_scroll_offset(42.0);
    assert!(reload(&mut monitor, &mut state));
    let target = state.session.take_pending_scroll().expect("pending scroll");
    assert_eq!(target, ScrollTarget::Bottom);
    assert_eq!(target.resolve(640.0), 640.0);

    state.session.toggle_auto_scroll();
    state.session.record_scroll_offset(42.0);
    assert!(reload(&mut monitor, &mut state));
    let target = state.session.take_pending_scroll().expect("pending scroll");
    assert_eq!(target, ScrollTarget::Offset(42.0));
    assert_eq!(target.resolve(640.0), 42.0);
}
