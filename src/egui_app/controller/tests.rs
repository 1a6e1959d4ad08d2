use super::add_intern::validate;
use super::test_support::{COMMIT, RESET, controller_on, dummy_controller, fill_valid_draft};
use super::*;
use crate::auth::DEMO_PASSWORD;
use crate::roster::{SortDirection, SortState};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[test]
fn directory_starts_with_full_roster_sorted_by_name() {
    let controller = dummy_controller();
    let names: Vec<_> = controller
        .ui
        .directory
        .cards
        .iter()
        .map(|card| card.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Alex Johnson",
            "Carlos Rodriguez",
            "Emma Chen",
            "Jamal Wilson",
            "Maya Patel",
            "Sophia Kim",
            "Tyler Smith",
            "Zoe Williams",
        ]
    );
}

#[test]
fn query_and_sort_changes_rebuild_cards() {
    let mut controller = controller_on(Destination::Directory);
    controller.set_directory_query("ENGINEERING");
    controller.select_sort_key(SortKey::StartDate);
    assert_eq!(
        controller.visible_intern_ids(),
        vec![InternId(5), InternId(1), InternId(7)]
    );

    controller.select_sort_key(SortKey::StartDate);
    assert_eq!(controller.ui.directory.sort.direction, SortDirection::Descending);
    assert_eq!(
        controller.visible_intern_ids(),
        vec![InternId(7), InternId(1), InternId(5)]
    );

    controller.set_directory_query("");
    assert_eq!(controller.visible_intern_count(), 8);
}

#[test]
fn switching_sort_key_resets_to_ascending() {
    let mut controller = dummy_controller();
    controller.select_sort_key(SortKey::Name);
    assert_eq!(controller.ui.directory.sort.direction, SortDirection::Descending);
    controller.select_sort_key(SortKey::Department);
    assert_eq!(controller.ui.directory.sort.key, SortKey::Department);
    assert_eq!(controller.ui.directory.sort.direction, SortDirection::Ascending);
}

#[test]
fn unmatched_query_leaves_no_cards() {
    let mut controller = dummy_controller();
    controller.set_directory_query("quantum");
    assert_eq!(controller.visible_intern_count(), 0);
}

#[test]
fn overlay_follows_latest_selection() {
    let mut controller = controller_on(Destination::Directory);
    assert!(controller.open_intern(InternId(2)));
    controller.close_overlay();
    assert!(controller.open_intern(InternId(6)));
    assert_eq!(controller.ui.overlay, OverlayState::Open { id: InternId(6) });
    assert_eq!(controller.selected_intern().unwrap().name, "Sophia Kim");
}

#[test]
fn open_switches_directly_between_records() {
    let mut controller = dummy_controller();
    controller.open_intern(InternId(1));
    controller.open_intern(InternId(8));
    assert_eq!(controller.ui.overlay.selected_id(), Some(InternId(8)));
}

#[test]
fn unknown_intern_is_not_opened() {
    let mut controller = dummy_controller();
    assert!(!controller.open_intern(InternId(42)));
    assert_eq!(controller.ui.overlay, OverlayState::Closed);

    controller.open_intern(InternId(3));
    assert!(!controller.open_intern(InternId(42)));
    assert_eq!(controller.ui.overlay.selected_id(), Some(InternId(3)));
}

#[test]
fn entering_directory_closes_overlay() {
    let mut controller = controller_on(Destination::Directory);
    controller.open_intern(InternId(4));
    controller.navigate(Destination::Home);
    controller.navigate(Destination::Directory);
    assert!(!controller.ui.overlay.is_open());
    assert!(controller.selected_intern().is_none());
}

#[test]
fn returning_to_directory_starts_a_fresh_session() {
    let mut controller = controller_on(Destination::Directory);
    controller.set_directory_query("design");
    controller.select_sort_key(SortKey::StartDate);
    controller.focus_directory_search();
    assert_eq!(controller.visible_intern_count(), 1);

    controller.navigate(Destination::Home);
    controller.navigate(Destination::Directory);

    let directory = &controller.ui.directory;
    assert!(directory.query.is_empty());
    assert_eq!(directory.sort, SortState::default());
    assert!(!directory.search_focus_requested);
    assert_eq!(
        controller.visible_intern_ids(),
        [1, 5, 4, 3, 2, 6, 7, 8].map(InternId).to_vec()
    );
}

#[test]
fn unparseable_start_date_blocks_submission() {
    for bad in ["banana", "   ", "2025-13-01", "2025-02-30", "03/01/2025"] {
        let mut controller = controller_on(Destination::AddIntern);
        fill_valid_draft(&mut controller);
        controller.set_draft_field(DraftField::StartDate, bad);
        assert!(!controller.submit_add_intern(Instant::now()), "{bad:?}");
        let form = &controller.ui.add_intern;
        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(
            form.error(DraftField::StartDate),
            Some("Start date is required"),
            "{bad:?}"
        );
        assert_eq!(form.errors.len(), 1);
        assert!(!controller.has_pending_tasks());
    }
}

#[test]
fn empty_name_blocks_submission() {
    let mut controller = controller_on(Destination::AddIntern);
    fill_valid_draft(&mut controller);
    controller.set_draft_field(DraftField::Name, "");
    assert!(!controller.submit_add_intern(Instant::now()));
    let form = &controller.ui.add_intern;
    assert_eq!(form.error(DraftField::Name), Some("Name is required"));
    assert_eq!(form.errors.len(), 1);
    assert_eq!(form.phase, FormPhase::Editing);
    assert!(!controller.has_pending_tasks());
}

#[test]
fn malformed_email_is_reported() {
    let mut controller = controller_on(Destination::AddIntern);
    fill_valid_draft(&mut controller);
    controller.set_draft_field(DraftField::Email, "not-an-email");
    assert!(!controller.submit_add_intern(Instant::now()));
    assert_eq!(
        controller.ui.add_intern.error(DraftField::Email),
        Some("Invalid email format")
    );
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut controller = controller_on(Destination::AddIntern);
    controller.submit_add_intern(Instant::now());
    assert_eq!(controller.ui.add_intern.errors.len(), 5);

    controller.set_draft_field(DraftField::Role, "R");
    let form = &controller.ui.add_intern;
    assert_eq!(form.error(DraftField::Role), None);
    assert_eq!(form.errors.len(), 4);
    assert_eq!(form.error(DraftField::Name), Some("Name is required"));
}

#[test]
fn failed_validation_replaces_errors_wholesale() {
    let mut controller = controller_on(Destination::AddIntern);
    controller.submit_add_intern(Instant::now());
    fill_valid_draft(&mut controller);
    controller.set_draft_field(DraftField::Email, "broken");
    controller.submit_add_intern(Instant::now());
    let errors = &controller.ui.add_intern.errors;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(&DraftField::Email), Some(&"Invalid email format"));
    assert_eq!(errors, &validate(&controller.ui.add_intern.draft));
}

#[test]
fn valid_submission_runs_full_lifecycle() {
    let start = Instant::now();
    let mut controller = controller_on(Destination::AddIntern);
    fill_valid_draft(&mut controller);

    assert!(controller.submit_add_intern(start));
    assert_eq!(controller.ui.add_intern.phase, FormPhase::Submitting);
    assert_eq!(controller.next_deadline(), Some(start + COMMIT));

    controller.tick(start + COMMIT - Duration::from_millis(1));
    assert_eq!(controller.ui.add_intern.phase, FormPhase::Submitting);

    let committed_at = start + COMMIT;
    controller.tick(committed_at);
    assert_eq!(controller.ui.add_intern.phase, FormPhase::Succeeded);
    assert_eq!(controller.next_deadline(), Some(committed_at + RESET));

    controller.tick(committed_at + RESET);
    let form = &controller.ui.add_intern;
    assert_eq!(form.phase, FormPhase::Editing);
    assert!(form.draft.is_blank());
    assert!(form.errors.is_empty());
    assert!(!controller.has_pending_tasks());
    assert_eq!(controller.roster().len(), 8);
}

#[test]
fn form_is_read_only_while_saving() {
    let start = Instant::now();
    let mut controller = controller_on(Destination::AddIntern);
    fill_valid_draft(&mut controller);
    controller.submit_add_intern(start);

    controller.set_draft_field(DraftField::Name, "Changed");
    assert_eq!(controller.ui.add_intern.draft.name, "Riley Ortiz");
    assert!(!controller.submit_add_intern(start));
    assert_eq!(controller.form_tasks.len(), 1);
}

#[test]
fn dismissing_success_resets_immediately() {
    let start = Instant::now();
    let mut controller = controller_on(Destination::AddIntern);
    fill_valid_draft(&mut controller);
    controller.submit_add_intern(start);
    controller.tick(start + COMMIT);

    controller.dismiss_add_intern_success();
    assert_eq!(controller.ui.add_intern, AddInternState::default());
    assert!(!controller.has_pending_tasks());

    fill_valid_draft(&mut controller);
    controller.tick(start + COMMIT + RESET);
    assert_eq!(controller.ui.add_intern.draft.name, "Riley Ortiz");
}

#[test]
fn leaving_the_form_cancels_pending_work() {
    let start = Instant::now();
    let mut controller = controller_on(Destination::AddIntern);
    fill_valid_draft(&mut controller);
    controller.submit_add_intern(start);

    controller.navigate(Destination::Home);
    assert!(!controller.has_pending_tasks());
    assert_eq!(controller.ui.add_intern, AddInternState::default());

    controller.navigate(Destination::AddIntern);
    controller.tick(start + COMMIT + RESET);
    assert_eq!(controller.ui.add_intern.phase, FormPhase::Editing);
}

#[test]
fn cancel_returns_to_directory() {
    let mut controller = controller_on(Destination::AddIntern);
    controller.set_draft_field(DraftField::Name, "Draft");
    controller.cancel_add_intern();
    assert_eq!(controller.ui.route, Destination::Directory);
    assert!(controller.ui.add_intern.draft.is_blank());
}

#[derive(Clone, Default)]
struct RecordingCommitter {
    seen: Rc<RefCell<Vec<String>>>,
}

impl DraftCommitter for RecordingCommitter {
    fn begin_commit(&mut self, draft: &InternDraft) -> Duration {
        self.seen.borrow_mut().push(draft.email.clone());
        Duration::from_millis(10)
    }
}

#[test]
fn committer_controls_latency() {
    let committer = RecordingCommitter::default();
    let seen = committer.seen.clone();
    let mut controller = dummy_controller().with_committer(Box::new(committer));
    controller.navigate(Destination::AddIntern);
    fill_valid_draft(&mut controller);
    let start = Instant::now();
    controller.submit_add_intern(start);
    controller.tick(start + Duration::from_millis(10));
    assert_eq!(controller.ui.add_intern.phase, FormPhase::Succeeded);
    assert_eq!(seen.borrow().as_slice(), ["riley@company.com".to_string()]);
}

#[test]
fn configured_timings_drive_the_delays() {
    let settings = AppSettings {
        timings: FormTimings {
            commit_delay_ms: 50,
            success_reset_ms: 70,
        },
        ..AppSettings::default()
    };
    let mut controller = EguiController::new(Roster::builtin(), &settings);
    controller.navigate(Destination::AddIntern);
    fill_valid_draft(&mut controller);
    let start = Instant::now();
    controller.submit_add_intern(start);
    assert_eq!(controller.next_deadline(), Some(start + Duration::from_millis(50)));
    controller.tick(start + Duration::from_millis(50));
    assert_eq!(
        controller.next_deadline(),
        Some(start + Duration::from_millis(120))
    );
}

#[test]
fn intern_login_redirects_to_intern_home() {
    let mut controller = controller_on(Destination::InternLogin);
    let form = controller.login_form_mut(LoginScreen::Intern);
    form.email = "admin@example.com".into();
    form.password = DEMO_PASSWORD.into();
    assert_eq!(
        controller.submit_login(LoginScreen::Intern),
        Ok(Destination::InternHome)
    );
    assert_eq!(controller.ui.route, Destination::InternHome);
}

#[test]
fn hr_login_redirects_to_directory() {
    let mut controller = controller_on(Destination::HrLogin);
    let form = controller.login_form_mut(LoginScreen::Hr);
    form.email = "admin@example.com".into();
    form.password = "password123".into();
    assert_eq!(
        controller.submit_login(LoginScreen::Hr),
        Ok(Destination::Directory)
    );
}

#[test]
fn rejected_login_shows_message_and_stays() {
    let mut controller = controller_on(Destination::InternLogin);
    assert_eq!(
        controller.submit_login(LoginScreen::Intern),
        Err(AuthRejection::MissingFields)
    );
    assert_eq!(
        controller.ui.intern_login.error.as_deref(),
        Some("Please enter both email and password.")
    );

    let form = controller.login_form_mut(LoginScreen::Intern);
    form.email = "x".into();
    form.password = "y".into();
    controller.submit_login(LoginScreen::Intern).unwrap_err();
    assert_eq!(
        controller.ui.intern_login.error.as_deref(),
        Some("Invalid email or password.")
    );
    assert_eq!(controller.ui.route, Destination::InternLogin);
}

#[test]
fn reentering_login_clears_previous_attempt() {
    let mut controller = controller_on(Destination::HrLogin);
    controller.login_form_mut(LoginScreen::Hr).email = "someone".into();
    controller.submit_login(LoginScreen::Hr).unwrap_err();
    controller.navigate(Destination::Home);
    controller.navigate(Destination::HrLogin);
    assert_eq!(controller.ui.hr_login, LoginFormState::default());
}

struct DenyAll;

impl CredentialVerifier for DenyAll {
    fn verify(&self, _email: &str, _password: &str) -> bool {
        false
    }
}

#[test]
fn verifier_can_be_replaced_per_screen() {
    let mut controller = dummy_controller().with_verifier(LoginScreen::Intern, Box::new(DenyAll));
    controller.navigate(Destination::InternLogin);
    let form = controller.login_form_mut(LoginScreen::Intern);
    form.email = "admin@example.com".into();
    form.password = "password123".into();
    assert_eq!(
        controller.submit_login(LoginScreen::Intern),
        Err(AuthRejection::InvalidCredentials)
    );

    controller.navigate(Destination::HrLogin);
    let form = controller.login_form_mut(LoginScreen::Hr);
    form.email = "admin@example.com".into();
    form.password = "password123".into();
    assert!(controller.submit_login(LoginScreen::Hr).is_ok());
}

#[test]
fn theme_toggle_round_trips() {
    let mut controller = dummy_controller();
    assert_eq!(controller.ui.theme, ThemeMode::Light);
    controller.toggle_theme();
    assert!(controller.ui.theme.is_dark());
    controller.toggle_theme();
    assert_eq!(controller.ui.theme, ThemeMode::Light);
}

#[test]
fn theme_comes_from_settings() {
    let settings = AppSettings {
        theme: ThemeMode::Dark,
        ..AppSettings::default()
    };
    let controller = EguiController::new(Roster::builtin(), &settings);
    assert_eq!(controller.ui.theme, ThemeMode::Dark);
}

#[test]
fn missing_photo_sets_warning_status() {
    let mut records = crate::roster::builtin_records();
    records[0].photo.clear();
    let roster = Roster::new(records).unwrap();
    let mut controller = EguiController::new(roster, &AppSettings::default());
    controller.open_intern(InternId(1));
    controller.open_selected_photo();
    assert_eq!(controller.ui.status.text, "No photo available");
}
