use super::EguiApp;
use super::helpers;
use super::style;
use crate::egui_app::state::Destination;
use eframe::egui::{RichText, Ui};

impl EguiApp {
    /// Landing screen after a successful intern login.
    pub(super) fn render_intern_home(&mut self, ui: &mut Ui) {
        let mode = self.controller.ui.theme;
        let palette = style::palette(mode);
        helpers::page_title(ui, &palette, Destination::InternHome.label());
        helpers::card_frame(mode).show(ui, |ui| {
            ui.label(RichText::new("Welcome back!").size(20.0).strong());
            ui.add_space(6.0);
            ui.label(
                RichText::new(
                    "Your profile, mentor and project assignments are managed by HR. \
                     Browse the directory to find your cohort.",
                )
                .color(palette.text_muted),
            );
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .add(helpers::primary_button(&palette, "Browse Interns"))
                    .clicked()
                {
                    self.controller.navigate(Destination::Directory);
                }
                if ui.add(helpers::text_button(&palette, "Back to Home")).clicked() {
                    self.controller.navigate(Destination::Home);
                }
            });
        });
    }
}
