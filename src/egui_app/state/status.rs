use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Neutral status shown when nothing is in flight.
    pub fn idle() -> Self {
        Self::with_tone("Welcome to the Intern Portal", StatusTone::Idle)
    }

    pub fn with_tone(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            badge_label: tone.label().to_string(),
            badge_color: style::status_badge_color(tone),
        }
    }
}
