use super::EguiApp;
use super::helpers;
use super::style;
use crate::egui_app::state::Destination;
use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

impl EguiApp {
    pub(super) fn render_navbar(&mut self, ctx: &egui::Context) {
        let mode = self.controller.ui.theme;
        let palette = style::palette(mode);
        egui::TopBottomPanel::top("navbar")
            .frame(
                Frame::new()
                    .fill(palette.surface)
                    .stroke(style::card_stroke(mode))
                    .inner_margin(Margin::symmetric(20, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let logo = ui.add(
                        egui::Label::new(
                            RichText::new("Intern Portal")
                                .size(22.0)
                                .strong()
                                .color(palette.primary),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if logo.clicked() {
                        self.controller.navigate(Destination::Home);
                    }
                    ui.add_space(24.0);
                    let current = self.controller.ui.route;
                    for destination in Destination::NAV_LINKS {
                        let active = current == destination;
                        let color = if active {
                            palette.primary
                        } else {
                            palette.text
                        };
                        let mut text = RichText::new(destination.label()).color(color);
                        if active {
                            text = text.strong();
                        }
                        let link = ui.add(egui::Button::new(text).frame(false));
                        if active {
                            let rect = link.rect;
                            ui.painter().hline(
                                rect.x_range(),
                                rect.bottom() + 2.0,
                                egui::Stroke::new(2.0, palette.primary),
                            );
                        }
                        if link.clicked() {
                            self.controller.navigate(destination);
                        }
                        ui.add_space(8.0);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let icon = if mode.is_dark() { "☀" } else { "🌙" };
                        if ui
                            .add(egui::Button::new(RichText::new(icon).size(16.0)).frame(false))
                            .on_hover_text(mode.toggle_hint())
                            .clicked()
                        {
                            self.controller.toggle_theme();
                        }
                        ui.add_space(8.0);
                        if ui
                            .add(helpers::outline_button(
                                &palette,
                                Destination::InternLogin.label(),
                            ))
                            .clicked()
                        {
                            self.controller.navigate(Destination::InternLogin);
                        }
                        if ui
                            .add(helpers::primary_button(
                                &palette,
                                Destination::HrLogin.label(),
                            ))
                            .clicked()
                        {
                            self.controller.navigate(Destination::HrLogin);
                        }
                    });
                });
            });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let mode = self.controller.ui.theme;
        let palette = style::palette(mode);
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.surface)
                    .stroke(style::card_stroke(mode))
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(badge_rect, 3.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        3.0,
                        style::card_stroke(mode),
                        StrokeKind::Inside,
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_muted));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let summary = format!("{} interns on roster", self.controller.roster().len());
                        ui.label(RichText::new(summary).small().color(palette.text_muted));
                    });
                });
            });
    }
}
