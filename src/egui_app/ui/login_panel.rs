use super::EguiApp;
use super::helpers;
use super::style;
use crate::egui_app::controller::LoginScreen;
use crate::egui_app::state::Destination;
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Ui};

impl EguiApp {
    pub(super) fn render_login(&mut self, ui: &mut Ui, screen: LoginScreen) {
        let mode = self.controller.ui.theme;
        let palette = style::palette(mode);
        ui.vertical_centered(|ui| {
            helpers::page_title(ui, &palette, screen.title());
        });

        let mut submit = false;
        let mut back = false;
        ui.vertical_centered(|ui| {
            ui.set_max_width(420.0);
            helpers::card_frame(mode).show(ui, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    let form = self.controller.login_form_mut(screen);
                    if let Some(error) = &form.error {
                        Frame::new()
                            .fill(style::with_alpha(palette.error, 30))
                            .corner_radius(CornerRadius::same(style::RADIUS / 2))
                            .inner_margin(Margin::symmetric(10, 8))
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.label(RichText::new(error).color(palette.error));
                            });
                        ui.add_space(10.0);
                    }
                    helpers::labeled_field(
                        ui,
                        &palette,
                        "Email Address",
                        egui::TextEdit::singleline(&mut form.email),
                        None,
                    );
                    let password = helpers::labeled_field(
                        ui,
                        &palette,
                        "Password",
                        egui::TextEdit::singleline(&mut form.password).password(true),
                        None,
                    );
                    if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                    ui.horizontal(|ui| {
                        if ui.add(helpers::primary_button(&palette, "Login")).clicked() {
                            submit = true;
                        }
                        if ui.add(helpers::text_button(&palette, "Back to Home")).clicked() {
                            back = true;
                        }
                    });
                });
            });
        });

        if submit {
            // Rejections are already stored on the form for display.
            let _ = self.controller.submit_login(screen);
        } else if back {
            self.controller.navigate(Destination::Home);
        }
    }
}
