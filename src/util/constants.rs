// LogMonitor - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogMonitor";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogMonitor";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Tail-and-filter
// =============================================================================

/// Number of matching lines retained from the end of the file.
///
/// Fixed; deliberately not exposed through config.toml or the CLI.
pub const TAIL_LINE_CAPACITY: usize = 100;

// =============================================================================
// Poller
// =============================================================================

/// Default interval between reloads of the selected file.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Lower bound for a configured poll interval.
pub const MIN_POLL_INTERVAL_MS: u64 = 50;

/// Upper bound for a configured poll interval.
pub const MAX_POLL_INTERVAL_MS: u64 = 10_000; // 10 s

// =============================================================================
// UI defaults
// =============================================================================

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum allowed font size.
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum allowed font size.
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Extensions suggested by the open-file dialog. Not enforced.
pub const SUGGESTED_LOG_EXTENSIONS: &[&str] = &["log"];

/// Maximum number of warnings kept for the status bar tooltip.
pub const MAX_WARNINGS: usize = 100;

// =============================================================================
// Logging / files
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Name of the optional configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
