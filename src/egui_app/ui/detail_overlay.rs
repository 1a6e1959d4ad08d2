use super::EguiApp;
use super::helpers;
use super::overlay_layers::{OverlayLayer, modal_backdrop};
use super::style;
use crate::egui_app::view_model;
use eframe::egui::{self, Align2, RichText};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OverlayAction {
    None,
    Close,
    OpenPhoto,
}

impl EguiApp {
    /// Render the modal intern profile when one is selected.
    pub(super) fn render_detail_overlay(&mut self, ctx: &egui::Context) {
        let Some(intern) = self.controller.selected_intern().cloned() else {
            return;
        };
        let mode = self.controller.ui.theme;
        let palette = style::palette(mode);

        let backdrop = modal_backdrop(
            ctx,
            egui::Id::new("intern_detail_backdrop"),
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 150),
        );
        if backdrop.clicked() || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.close_overlay();
            return;
        }

        let mut open = true;
        let mut action = OverlayAction::None;
        egui::Window::new(RichText::new(&intern.name).size(22.0).strong())
            .id(egui::Id::new("intern_detail_window"))
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(OverlayLayer::Modal.order())
            .collapsible(false)
            .resizable(false)
            .default_width(520.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.set_min_width(520.0);
                ui.label(RichText::new(&intern.role).size(16.0).color(palette.text_muted));
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    helpers::badge(ui, &intern.department, palette.secondary);
                    ui.label(RichText::new(&intern.email).color(palette.primary));
                });
                ui.add_space(8.0);
                ui.label(format!(
                    "Started on {}",
                    view_model::display_date(intern.start_date)
                ));
                ui.label(format!("Mentored by {}", intern.mentor));
                ui.separator();
                ui.label(RichText::new("About").strong());
                ui.label(&intern.bio);
                if !intern.skills.is_empty() {
                    ui.add_space(8.0);
                    ui.label(RichText::new("Skills").strong());
                    ui.horizontal_wrapped(|ui| {
                        for skill in &intern.skills {
                            helpers::badge(ui, skill, palette.primary);
                        }
                    });
                }
                if !intern.projects.is_empty() {
                    ui.add_space(8.0);
                    ui.label(RichText::new("Projects").strong());
                    for project in &intern.projects {
                        ui.label(format!("• {project}"));
                    }
                }
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let photo = ui
                        .add_enabled(
                            !intern.photo.is_empty(),
                            helpers::outline_button(&palette, "Open photo"),
                        )
                        .on_hover_text(&intern.photo);
                    if photo.clicked() {
                        action = OverlayAction::OpenPhoto;
                    }
                    if ui.add(helpers::primary_button(&palette, "Close")).clicked() {
                        action = OverlayAction::Close;
                    }
                });
            });

        if !open {
            action = OverlayAction::Close;
        }
        match action {
            OverlayAction::None => {}
            OverlayAction::Close => self.controller.close_overlay(),
            OverlayAction::OpenPhoto => self.controller.open_selected_photo(),
        }
    }
}
