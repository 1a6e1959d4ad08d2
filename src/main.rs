#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based Intern Portal.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use intern_portal::config;
use intern_portal::egui_app::controller::EguiController;
use intern_portal::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use intern_portal::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let startup = load_controller();

    let viewport = egui::ViewportBuilder::default()
        .with_title("Intern Portal")
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size([1200.0, 800.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Intern Portal",
        native_options,
        Box::new(move |_cc| {
            let app: Box<dyn eframe::App> = match startup {
                Ok(controller) => Box::new(EguiApp::new(controller)),
                Err(message) => Box::new(LaunchError { message }),
            };
            Ok(app)
        }),
    )?;
    Ok(())
}

/// Read settings and the roster, reporting failures as a display message.
fn load_controller() -> Result<EguiController, String> {
    let settings = config::load_or_default().map_err(|err| {
        tracing::error!("Config load failed: {err}");
        format!("Failed to load config: {err}")
    })?;
    let roster = config::load_roster(&settings).map_err(|err| {
        tracing::error!("Roster load failed: {err}");
        format!("Failed to load roster: {err}")
    })?;
    tracing::info!("Loaded {} interns", roster.len());
    Ok(EguiController::new(roster, &settings))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
