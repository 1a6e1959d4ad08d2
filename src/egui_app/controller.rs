//! Application state owner bridging the roster and gates to the egui UI.
//!
//! The renderer reads [`EguiController::ui`] and calls handler methods in
//! response to input; it never mutates domain state on its own.

mod add_intern;
mod directory;
mod login;
mod navigation;
mod overlay;
pub mod scheduler;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use add_intern::{DraftCommitter, SimulatedCommit};
pub use login::LoginScreen;

use crate::auth::{AuthGate, AuthRejection, CredentialVerifier};
use crate::config::{AppSettings, FormTimings};
use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::egui_app::view_model;
use crate::roster::{InternId, InternRecord, Roster, SortKey};
use add_intern::FormTask;
use scheduler::{DelayedTasks, TaskId};
use std::time::Instant;

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    roster: Roster,
    timings: FormTimings,
    form_tasks: DelayedTasks<FormTask>,
    pending_reset: Option<TaskId>,
    committer: Box<dyn DraftCommitter>,
    hr_gate: AuthGate,
    intern_gate: AuthGate,
}

impl EguiController {
    pub fn new(roster: Roster, settings: &AppSettings) -> Self {
        let timings = settings.timings;
        let mut controller = Self {
            ui: UiState {
                theme: settings.theme,
                ..UiState::default()
            },
            roster,
            timings,
            form_tasks: DelayedTasks::new(),
            pending_reset: None,
            committer: Box::new(SimulatedCommit::new(timings.commit_delay())),
            hr_gate: AuthGate::demo(Destination::Directory),
            intern_gate: AuthGate::demo(Destination::InternHome),
        };
        controller.rebuild_directory();
        controller
    }

    /// Swap the back end that receives validated drafts.
    pub fn with_committer(mut self, committer: Box<dyn DraftCommitter>) -> Self {
        self.committer = committer;
        self
    }

    /// Swap the credential check behind one login screen.
    pub fn with_verifier(
        mut self,
        screen: LoginScreen,
        verifier: Box<dyn CredentialVerifier>,
    ) -> Self {
        match screen {
            LoginScreen::Hr => {
                self.hr_gate = AuthGate::new(verifier, self.hr_gate.redirect());
            }
            LoginScreen::Intern => {
                self.intern_gate = AuthGate::new(verifier, self.intern_gate.redirect());
            }
        }
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Fire every delayed task due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for task in self.form_tasks.take_due(now) {
            self.handle_form_task(task, now);
        }
    }

    /// When the UI must next call [`Self::tick`], if anything is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.form_tasks.next_deadline()
    }

    pub fn has_pending_tasks(&self) -> bool {
        !self.form_tasks.is_empty()
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::with_tone(text, tone);
    }
}
