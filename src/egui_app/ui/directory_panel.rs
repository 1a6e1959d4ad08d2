use super::EguiApp;
use super::helpers;
use super::style;
use crate::egui_app::state::InternCardView;
use crate::egui_app::view_model;
use crate::roster::{InternId, SortDirection, SortKey};
use eframe::egui::{self, RichText, Ui};

const CARD_WIDTH: f32 = 250.0;

impl EguiApp {
    pub(super) fn render_directory(&mut self, ui: &mut Ui) {
        let mode = self.controller.ui.theme;
        let palette = style::palette(mode);
        helpers::page_title(ui, &palette, "Intern Dashboard");
        self.render_directory_controls(ui);
        ui.add_space(6.0);
        let summary = view_model::result_summary(
            self.controller.visible_intern_count(),
            self.controller.roster().len(),
        );
        ui.label(RichText::new(summary).small().color(palette.text_muted));
        ui.add_space(10.0);

        if self.controller.ui.directory.cards.is_empty() {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No interns found").size(20.0).strong());
                ui.label(
                    RichText::new("Try adjusting your search or filters").color(palette.text_muted),
                );
            });
            return;
        }

        let mut clicked: Option<InternId> = None;
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
            for card in &self.controller.ui.directory.cards {
                if self.render_intern_card(ui, card) {
                    clicked = Some(card.id);
                }
            }
        });
        if let Some(id) = clicked {
            self.controller.open_intern(id);
        }
    }

    fn render_directory_controls(&mut self, ui: &mut Ui) {
        let palette = style::palette(self.controller.ui.theme);
        ui.horizontal(|ui| {
            let mut query = self.controller.ui.directory.query.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search interns...")
                    .desired_width(320.0),
            );
            if self.controller.ui.directory.search_focus_requested {
                response.request_focus();
                self.controller.ui.directory.search_focus_requested = false;
            }
            if response.changed() {
                self.controller.set_directory_query(query);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let sort = self.controller.ui.directory.sort;
                // right_to_left lays out the last key first
                for key in SortKey::ALL.into_iter().rev() {
                    let active = sort.key == key;
                    let label = if active {
                        let arrow = match sort.direction {
                            SortDirection::Ascending => "▲",
                            SortDirection::Descending => "▼",
                        };
                        format!("{} {arrow}", key.label())
                    } else {
                        key.label().to_string()
                    };
                    let button = if active {
                        helpers::primary_button(&palette, &label)
                    } else {
                        helpers::outline_button(&palette, &label)
                    };
                    if ui.add(button.min_size(egui::vec2(96.0, 30.0))).clicked() {
                        self.controller.select_sort_key(key);
                    }
                }
                ui.label(RichText::new("Sort by").color(palette.text_muted));
            });
        });
        if ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::F)) {
            self.controller.focus_directory_search();
        }
    }

    /// Draw one card and report whether it was clicked.
    fn render_intern_card(&self, ui: &mut Ui, card: &InternCardView) -> bool {
        let mode = self.controller.ui.theme;
        let palette = style::palette(mode);
        let response = helpers::card_frame(mode)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.label(RichText::new(&card.name).size(18.0).strong());
                ui.label(RichText::new(&card.role).color(palette.text_muted));
                ui.add_space(6.0);
                helpers::badge(ui, &card.department, palette.secondary);
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("Started {}", card.start_label))
                        .small()
                        .color(palette.text_muted),
                );
            })
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        response.clicked()
    }
}
