use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::ThemeMode;

/// Rounding shared by cards, buttons and modal windows.
pub const RADIUS: u8 = 12;

/// Named colors for one theme mode.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Buttons, links and selection highlights.
    pub primary: Color32,
    /// Department badges and card headings.
    pub secondary: Color32,
    /// Window fill behind every panel.
    pub background: Color32,
    /// Header, status bar, windows and inactive widgets.
    pub surface: Color32,
    /// Body text.
    pub text: Color32,
    /// Hints, captions and placeholder text.
    pub text_muted: Color32,
    /// Warning text.
    pub accent: Color32,
    /// Field errors and the error status badge.
    pub error: Color32,
    /// Success banner and the info status badge.
    pub success: Color32,
    /// Card fill and faint backgrounds.
    pub card_bg: Color32,
    /// Borders around cards and widgets.
    pub outline: Color32,
}

const LIGHT: Palette = Palette {
    primary: Color32::from_rgb(0x3a, 0x86, 0xff),
    secondary: Color32::from_rgb(0x83, 0x38, 0xec),
    background: Color32::from_rgb(0xf8, 0xf9, 0xfa),
    surface: Color32::from_rgb(0xff, 0xff, 0xff),
    text: Color32::from_rgb(0x21, 0x25, 0x29),
    text_muted: Color32::from_rgb(0x6c, 0x75, 0x7d),
    accent: Color32::from_rgb(0xff, 0x00, 0x6e),
    error: Color32::from_rgb(0xdc, 0x35, 0x45),
    success: Color32::from_rgb(0x28, 0xa7, 0x45),
    card_bg: Color32::from_rgb(0xff, 0xff, 0xff),
    outline: Color32::from_rgb(0xde, 0xe2, 0xe6),
};

const DARK: Palette = Palette {
    primary: Color32::from_rgb(0x3a, 0x86, 0xff),
    secondary: Color32::from_rgb(0x83, 0x38, 0xec),
    background: Color32::from_rgb(0x12, 0x12, 0x12),
    surface: Color32::from_rgb(0x1e, 0x1e, 0x1e),
    text: Color32::from_rgb(0xf8, 0xf9, 0xfa),
    text_muted: Color32::from_rgb(0xad, 0xb5, 0xbd),
    accent: Color32::from_rgb(0xff, 0x00, 0x6e),
    error: Color32::from_rgb(0xdc, 0x35, 0x45),
    success: Color32::from_rgb(0x28, 0xa7, 0x45),
    card_bg: Color32::from_rgb(0x1e, 0x1e, 0x1e),
    outline: Color32::from_rgb(0x34, 0x38, 0x3d),
};

/// Colors for the given theme.
pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    }
}

/// Build egui visuals for the given mode.
pub fn visuals(mode: ThemeMode) -> Visuals {
    let palette = palette(mode);
    let mut visuals = if mode.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    visuals.window_fill = palette.surface;
    visuals.panel_fill = palette.background;
    visuals.override_text_color = Some(palette.text);
    visuals.hyperlink_color = palette.primary;
    visuals.extreme_bg_color = palette.surface;
    visuals.faint_bg_color = palette.card_bg;
    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.accent;
    visuals.selection.bg_fill = with_alpha(palette.primary, 90);
    visuals.selection.stroke = Stroke::new(1.0, palette.primary);
    visuals.widgets.noninteractive.bg_fill = palette.background;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.outline);
    set_rounded(&mut visuals.widgets.inactive, palette, palette.surface);
    set_rounded(&mut visuals.widgets.hovered, palette, with_alpha(palette.primary, 40));
    set_rounded(&mut visuals.widgets.active, palette, with_alpha(palette.primary, 70));
    set_rounded(&mut visuals.widgets.open, palette, palette.surface);
    visuals.window_corner_radius = CornerRadius::same(RADIUS);
    visuals.menu_corner_radius = CornerRadius::same(RADIUS / 2);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
    visuals
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette, fill: Color32) {
    vis.corner_radius = CornerRadius::same(RADIUS / 2);
    vis.bg_fill = fill;
    vis.weak_bg_fill = fill;
    vis.bg_stroke = Stroke::new(1.0, palette.outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text);
}

/// Border drawn around directory cards.
pub fn card_stroke(mode: ThemeMode) -> Stroke {
    Stroke::new(1.0, palette(mode).outline)
}

/// Same color with its alpha replaced.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Severity shown by the status bar badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

impl StatusTone {
    pub fn label(self) -> &'static str {
        match self {
            StatusTone::Idle => "Idle",
            StatusTone::Busy => "Working",
            StatusTone::Info => "Info",
            StatusTone::Warning => "Warning",
            StatusTone::Error => "Error",
        }
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(0x6c, 0x75, 0x7d),
        StatusTone::Busy => LIGHT.primary,
        StatusTone::Info => LIGHT.success,
        StatusTone::Warning => Color32::from_rgb(0xf0, 0xa0, 0x30),
        StatusTone::Error => LIGHT.error,
    }
}
