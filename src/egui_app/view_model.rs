//! Helpers to convert roster records into egui-facing view structs.

use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::egui_app::state::InternCardView;
use crate::roster::InternRecord;

const DISPLAY_DATE: &[FormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

/// Short date label used on cards and in the overlay, e.g. `1/15/2025`.
pub fn display_date(date: Date) -> String {
    date.format(DISPLAY_DATE)
        .unwrap_or_else(|_| date.to_string())
}

/// Convert a roster record into a directory card.
pub fn intern_card(record: &InternRecord) -> InternCardView {
    InternCardView {
        id: record.id,
        name: record.name.clone(),
        role: record.role.clone(),
        department: record.department.clone(),
        start_label: display_date(record.start_date),
    }
}

/// Caption for the directory header, e.g. `3 of 8 interns`.
pub fn result_summary(visible: usize, total: usize) -> String {
    let noun = if total == 1 { "intern" } else { "interns" };
    if visible == total {
        format!("{total} {noun}")
    } else {
        format!("{visible} of {total} {noun}")
    }
}
