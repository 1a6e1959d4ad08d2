//! Library exports for reuse in benchmarks and tests.
/// Per-user application directories.
pub mod app_dirs;
/// Mock login gate and credential verification.
pub mod auth;
/// Read-only TOML settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Rolling file logging.
pub mod logging;
/// Intern records and the directory filter/sort engine.
pub mod roster;
