use super::*;
use std::time::Duration;

pub(super) const COMMIT: Duration = Duration::from_millis(1_000);
pub(super) const RESET: Duration = Duration::from_millis(3_000);

pub(super) fn dummy_controller() -> EguiController {
    EguiController::new(Roster::builtin(), &AppSettings::default())
}

pub(super) fn controller_on(destination: Destination) -> EguiController {
    let mut controller = dummy_controller();
    controller.navigate(destination);
    controller
}

pub(super) fn fill_valid_draft(controller: &mut EguiController) {
    controller.set_draft_field(DraftField::Name, "Riley Ortiz");
    controller.set_draft_field(DraftField::Email, "riley@company.com");
    controller.set_draft_field(DraftField::Department, "Finance");
    controller.set_draft_field(DraftField::Role, "Finance Intern");
    controller.set_draft_field(DraftField::StartDate, "2025-03-01");
}
