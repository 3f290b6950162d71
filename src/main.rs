// LogMonitor - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::ui::...` etc.
pub use logmonitor::app;
pub use logmonitor::core;
pub use logmonitor::platform;
pub use logmonitor::ui;
pub use logmonitor::util;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// LogMonitor - follow a log file with a live substring filter.
///
/// Shows the last 100 matching lines of the file, refreshed on a timer.
#[derive(Parser, Debug)]
#[command(name = "LogMonitor", version, about)]
struct Cli {
    /// Log file to monitor (use Open File in the window if omitted).
    file: Option<PathBuf>,

    /// Poll interval in milliseconds (overrides config.toml).
    #[arg(short = 'i', long = "interval-ms")]
    interval_ms: Option<u64>,

    /// Initial filter text.
    #[arg(short = 'f', long = "filter")]
    filter: Option<String>,

    /// Start with auto-scroll to bottom turned off.
    #[arg(long = "no-auto-scroll")]
    no_auto_scroll: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists; its problems are reported below.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_problems) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogMonitor starting"
    );

    let mut state = app::state::AppState::new(&config, cli.debug);
    for problem in &config_problems {
        state.push_warning(format!("{problem}. Using default."));
    }

    // CLI interval overrides config; an invalid one falls back to config.
    let mut interval_ms = config.poll_interval_ms;
    if let Some(ms) = cli.interval_ms {
        match platform::config::validate_poll_interval(ms) {
            Ok(ms) => interval_ms = ms,
            Err(e) => state.push_warning(format!("--interval-ms: {e}")),
        }
    }

    if let Some(filter) = cli.filter {
        state.session.filter = filter;
    }
    if cli.no_auto_scroll {
        state.session.auto_scroll = false;
    }
    if let Some(path) = cli.file {
        state.open_file(path);
    }
    if !state.warnings.is_empty() {
        state.status_message = format!(
            "{} configuration warning(s); hover for details.",
            state.warnings.len()
        );
    }

    tracing::info!(interval_ms, "Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let poll_interval = Duration::from_millis(interval_ms);
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::LogMonitorApp::new(state, poll_interval)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LogMonitor GUI: {e}");
        std::process::exit(1);
    }
}
