use std::time::Instant;

use super::EguiApp;
use super::helpers;
use super::style;
use crate::egui_app::state::{DraftField, FormPhase};
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Ui};

impl EguiApp {
    pub(super) fn render_add_intern(&mut self, ui: &mut Ui) {
        let mode = self.controller.ui.theme;
        let palette = style::palette(mode);
        helpers::page_title(ui, &palette, "Add New Intern");

        if self.controller.ui.add_intern.phase == FormPhase::Succeeded {
            self.render_add_intern_banner(ui);
            ui.add_space(12.0);
        }

        let phase = self.controller.ui.add_intern.phase;
        let editable = phase == FormPhase::Editing;
        let mut submit = false;
        let mut cancel = false;
        helpers::card_frame(mode).show(ui, |ui| {
            ui.set_max_width(640.0);
            for field in DraftField::ALL {
                let mut value = self.controller.ui.add_intern.draft.field(field).to_string();
                let error = self.controller.ui.add_intern.error(field);
                let edit = egui::TextEdit::singleline(&mut value).hint_text(field.hint());
                let response = ui
                    .add_enabled_ui(editable, |ui| {
                        helpers::labeled_field(ui, &palette, field.label(), edit, error)
                    })
                    .inner;
                if response.changed() {
                    self.controller.set_draft_field(field, value);
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
            }
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(editable, helpers::text_button(&palette, "Cancel"))
                    .clicked()
                {
                    cancel = true;
                }
                let label = if phase == FormPhase::Submitting {
                    "Saving..."
                } else {
                    "Save Intern"
                };
                if ui
                    .add_enabled(editable, helpers::primary_button(&palette, label))
                    .clicked()
                {
                    submit = true;
                }
                if phase == FormPhase::Submitting {
                    ui.spinner();
                }
            });
        });

        if submit {
            self.controller.submit_add_intern(Instant::now());
        } else if cancel {
            self.controller.cancel_add_intern();
        }
    }

    fn render_add_intern_banner(&mut self, ui: &mut Ui) {
        let palette = style::palette(self.controller.ui.theme);
        Frame::new()
            .fill(style::with_alpha(palette.success, 40))
            .stroke(egui::Stroke::new(1.0, palette.success))
            .corner_radius(CornerRadius::same(style::RADIUS / 2))
            .inner_margin(Margin::symmetric(14, 10))
            .show(ui, |ui| {
                ui.set_max_width(640.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("✔ Intern added successfully!")
                            .strong()
                            .color(palette.success),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(egui::Button::new("✕").frame(false))
                            .on_hover_text("Dismiss")
                            .clicked()
                        {
                            self.controller.dismiss_add_intern_success();
                        }
                    });
                });
            });
    }
}
