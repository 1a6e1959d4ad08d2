use std::sync::LazyLock;

use regex::Regex;
use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::egui_app::state::{DraftField, FieldErrors, InternDraft};

pub(crate) const NAME_REQUIRED: &str = "Name is required";
pub(crate) const EMAIL_REQUIRED: &str = "Email is required";
pub(crate) const EMAIL_INVALID: &str = "Invalid email format";
pub(crate) const DEPARTMENT_REQUIRED: &str = "Department is required";
pub(crate) const ROLE_REQUIRED: &str = "Role is required";
pub(crate) const START_DATE_REQUIRED: &str = "Start date is required";

const START_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile")
});

/// Check every field and collect one message per failing field.
///
/// An empty map means the draft may be submitted.
pub(crate) fn validate(draft: &InternDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.name.trim().is_empty() {
        errors.insert(DraftField::Name, NAME_REQUIRED);
    }
    if draft.email.trim().is_empty() {
        errors.insert(DraftField::Email, EMAIL_REQUIRED);
    } else if !EMAIL_PATTERN.is_match(&draft.email) {
        errors.insert(DraftField::Email, EMAIL_INVALID);
    }
    if draft.department.trim().is_empty() {
        errors.insert(DraftField::Department, DEPARTMENT_REQUIRED);
    }
    if draft.role.trim().is_empty() {
        errors.insert(DraftField::Role, ROLE_REQUIRED);
    }
    if parse_start_date(&draft.start_date).is_none() {
        errors.insert(DraftField::StartDate, START_DATE_REQUIRED);
    }
    errors
}

/// Calendar date typed as `YYYY-MM-DD`. Blank or malformed text counts as no date.
pub(crate) fn parse_start_date(text: &str) -> Option<Date> {
    Date::parse(text.trim(), START_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> InternDraft {
        InternDraft {
            name: "Riley Ortiz".into(),
            email: "riley@company.com".into(),
            department: "Finance".into(),
            role: "Finance Intern".into(),
            start_date: "2025-03-01".into(),
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert!(validate(&complete()).is_empty());
    }

    #[test]
    fn blank_draft_reports_every_field() {
        let errors = validate(&InternDraft::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[&DraftField::Name], NAME_REQUIRED);
        assert_eq!(errors[&DraftField::Email], EMAIL_REQUIRED);
        assert_eq!(errors[&DraftField::StartDate], START_DATE_REQUIRED);
    }

    #[test]
    fn whitespace_only_text_fields_are_missing() {
        let mut draft = complete();
        draft.name = "   ".into();
        draft.role = "\t".into();
        draft.email = "  ".into();
        let errors = validate(&draft);
        assert_eq!(errors.get(&DraftField::Name), Some(&NAME_REQUIRED));
        assert_eq!(errors.get(&DraftField::Role), Some(&ROLE_REQUIRED));
        assert_eq!(errors.get(&DraftField::Email), Some(&EMAIL_REQUIRED));
    }

    #[test]
    fn email_format_is_checked() {
        for bad in ["not-an-email", "a@b", "a b@c.d", "@c.d", "a@@c.d"] {
            let mut draft = complete();
            draft.email = bad.into();
            assert_eq!(
                validate(&draft).get(&DraftField::Email),
                Some(&EMAIL_INVALID),
                "{bad}"
            );
        }
        let mut draft = complete();
        draft.email = "first.last@sub.company.io".into();
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn start_date_must_be_a_real_calendar_date() {
        for bad in ["banana", "   ", "2025-1-5", "2025-02-29", "2025-04-31", "01/15/2025"] {
            let mut draft = complete();
            draft.start_date = bad.into();
            let errors = validate(&draft);
            assert_eq!(errors.len(), 1, "{bad:?}");
            assert_eq!(
                errors.get(&DraftField::StartDate),
                Some(&START_DATE_REQUIRED),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn start_date_tolerates_surrounding_whitespace() {
        let mut draft = complete();
        draft.start_date = " 2024-02-29 ".into();
        assert!(validate(&draft).is_empty());
        assert_eq!(
            parse_start_date("2025-01-05"),
            Date::from_calendar_date(2025, time::Month::January, 5).ok()
        );
    }

    #[test]
    fn only_failing_fields_are_reported() {
        let mut draft = complete();
        draft.department.clear();
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&DraftField::Department], DEPARTMENT_REQUIRED);
    }
}
