// LogMonitor - ui/panels/mod.rs

pub mod about;
pub mod controls;
pub mod log_view;
