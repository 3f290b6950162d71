// LogMonitor - core/mod.rs
//
// Core logic layer.
// Dependencies: standard library and util only.
// Must NOT depend on: ui, platform, app.

pub mod model;
pub mod scroll;
pub mod tail;
