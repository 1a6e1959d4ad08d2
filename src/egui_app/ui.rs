//! egui renderer for the application UI.

mod add_intern_form;
mod chrome;
mod detail_overlay;
mod directory_panel;
mod helpers;
mod intern_home;
mod landing;
mod login_panel;
mod overlay_layers;
pub mod style;

use std::time::Instant;

use crate::egui_app::controller::{EguiController, LoginScreen};
use crate::egui_app::state::{Destination, ThemeMode};
use eframe::egui::{self, Frame, Margin};

/// Smallest window the page layouts stay usable in.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 520.0);

/// Widest the central column grows before centering.
const CONTENT_MAX_WIDTH: f32 = 1100.0;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    applied_theme: Option<ThemeMode>,
}

impl EguiApp {
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            applied_theme: None,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        let mode = self.controller.ui.theme;
        if self.applied_theme == Some(mode) {
            return;
        }
        ctx.set_visuals(style::visuals(mode));
        self.applied_theme = Some(mode);
    }

    fn render_page(&mut self, ctx: &egui::Context) {
        let palette = style::palette(self.controller.ui.theme);
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.background)
                    .inner_margin(Margin::symmetric(24, 16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt(("page_scroll", self.controller.ui.route))
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let side = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(0.0);
                        ui.horizontal(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_max_width(CONTENT_MAX_WIDTH.min(ui.available_width()));
                                match self.controller.ui.route {
                                    Destination::Home => self.render_landing(ui),
                                    Destination::Directory => self.render_directory(ui),
                                    Destination::AddIntern => self.render_add_intern(ui),
                                    Destination::InternHome => self.render_intern_home(ui),
                                    Destination::HrLogin => self.render_login(ui, LoginScreen::Hr),
                                    Destination::InternLogin => {
                                        self.render_login(ui, LoginScreen::Intern)
                                    }
                                }
                            });
                        });
                    });
            });
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if let Some(deadline) = self.controller.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.tick(now);
        self.apply_visuals(ctx);
        self.render_navbar(ctx);
        self.render_status(ctx);
        self.render_page(ctx);
        self.render_detail_overlay(ctx);
        self.schedule_repaint(ctx, now);
    }
}
