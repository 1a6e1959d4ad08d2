use super::style::{self, Palette};
use crate::egui_app::state::ThemeMode;
use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, RichText, Ui};

/// Pill-shaped label used for departments and skills.
pub(super) fn badge(ui: &mut Ui, text: &str, color: Color32) {
    Frame::new()
        .fill(style::with_alpha(color, 36))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(color).small().strong());
        });
}

/// Framed surface for cards and forms.
pub(super) fn card_frame(mode: ThemeMode) -> Frame {
    let palette = style::palette(mode);
    Frame::new()
        .fill(palette.card_bg)
        .stroke(style::card_stroke(mode))
        .corner_radius(CornerRadius::same(style::RADIUS))
        .inner_margin(Margin::same(16))
}

pub(super) fn page_title(ui: &mut Ui, palette: &Palette, title: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(title).size(28.0).strong().color(palette.primary));
    ui.add_space(12.0);
}

/// Labeled single-line input with an optional inline error underneath.
pub(super) fn labeled_field(
    ui: &mut Ui,
    palette: &Palette,
    label: &str,
    edit: egui::TextEdit<'_>,
    error: Option<&str>,
) -> egui::Response {
    ui.label(RichText::new(label).strong());
    ui.add_space(2.0);
    let mut edit = edit.desired_width(f32::INFINITY);
    if error.is_some() {
        edit = edit.background_color(style::with_alpha(palette.error, 24));
    }
    let response = ui.add(edit);
    if let Some(message) = error {
        ui.label(RichText::new(message).color(palette.error).small());
    }
    ui.add_space(10.0);
    response
}

pub(super) fn primary_button(palette: &Palette, label: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label.to_string()).color(Color32::WHITE).strong())
        .fill(palette.primary)
        .corner_radius(CornerRadius::same(style::RADIUS / 2))
        .min_size(egui::vec2(120.0, 34.0))
}

pub(super) fn outline_button(palette: &Palette, label: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label.to_string()).color(palette.primary))
        .fill(Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(1.5, palette.primary))
        .corner_radius(CornerRadius::same(style::RADIUS / 2))
        .min_size(egui::vec2(120.0, 34.0))
}

pub(super) fn text_button(palette: &Palette, label: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label.to_string()).color(palette.text_muted)).frame(false)
}
