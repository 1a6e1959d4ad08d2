/// Controller bridging roster logic and the egui renderer.
pub mod controller;
/// UI state types consumed by the renderer.
pub mod state;
/// egui rendering and visuals.
pub mod ui;
/// Conversions from roster records into display views.
pub mod view_model;
