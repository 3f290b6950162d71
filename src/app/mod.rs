// LogMonitor - app/mod.rs
//
// Application layer: session state, poll timing, background loading.
// Dependencies: core layer, platform fs/config.
// Must NOT depend on: ui.

pub mod monitor;
pub mod poller;
pub mod session;
pub mod state;
pub mod tail;
