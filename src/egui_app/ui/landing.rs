use super::EguiApp;
use super::helpers;
use super::style;
use crate::egui_app::state::Destination;
use eframe::egui::{self, RichText, Ui};

const FEATURES: [(&str, &str); 3] = [
    (
        "Intern Management",
        "Easily manage all your interns in one place. View profiles, track progress, and maintain records efficiently.",
    ),
    (
        "Skill Development",
        "Track and nurture the skills of your interns. Identify strengths and areas for improvement.",
    ),
    (
        "Performance Tracking",
        "Monitor intern performance with intuitive visualizations and detailed profiles.",
    ),
];

impl EguiApp {
    pub(super) fn render_landing(&mut self, ui: &mut Ui) {
        let mode = self.controller.ui.theme;
        let palette = style::palette(mode);
        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Intern Management Portal")
                    .size(40.0)
                    .strong()
                    .color(palette.primary),
            );
            ui.add_space(12.0);
            ui.label(
                RichText::new(
                    "A modern, intuitive platform to manage your organization's interns. \
                     Track progress, assign projects, and help them grow professionally.",
                )
                .size(16.0)
                .color(palette.text_muted),
            );
            ui.add_space(24.0);
            let button_row = 2.0 * 180.0 + ui.spacing().item_spacing.x;
            ui.allocate_ui(egui::vec2(button_row, 44.0), |ui| {
                ui.horizontal(|ui| {
                    let view = helpers::primary_button(&palette, "View Interns  →")
                        .min_size(egui::vec2(180.0, 44.0));
                    if ui.add(view).clicked() {
                        self.controller.navigate(Destination::Directory);
                    }
                    let add = helpers::outline_button(&palette, "Add New Intern")
                        .min_size(egui::vec2(180.0, 44.0));
                    if ui.add(add).clicked() {
                        self.controller.navigate(Destination::AddIntern);
                    }
                });
            });
        });
        ui.add_space(56.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Key Features").size(26.0).strong());
        });
        ui.add_space(20.0);
        ui.columns(FEATURES.len(), |columns| {
            for (column, (title, description)) in columns.iter_mut().zip(FEATURES) {
                helpers::card_frame(mode).show(column, |ui| {
                    ui.set_min_height(140.0);
                    ui.label(RichText::new(title).size(18.0).strong().color(palette.secondary));
                    ui.add_space(8.0);
                    ui.label(RichText::new(description).color(palette.text_muted));
                });
            }
        });
    }
}
