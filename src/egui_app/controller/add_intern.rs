mod commit;
mod validation;

pub use commit::{DraftCommitter, SimulatedCommit};
pub(crate) use validation::validate;

use super::*;

/// Timed steps of the add-intern lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FormTask {
    CommitFinished,
    ResetAfterSuccess,
}

impl EguiController {
    /// Replace one draft field, dropping that field's stale error.
    ///
    /// Ignored unless the form is editable.
    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        let form = &mut self.ui.add_intern;
        if form.phase != FormPhase::Editing {
            return;
        }
        *form.draft.field_mut(field) = value.into();
        form.errors.remove(&field);
    }

    /// Validate the draft and, if it passes, start the simulated save.
    ///
    /// Returns true when the form moved to `Submitting`.
    pub fn submit_add_intern(&mut self, now: Instant) -> bool {
        if self.ui.add_intern.phase != FormPhase::Editing {
            return false;
        }
        let errors = validate(&self.ui.add_intern.draft);
        if !errors.is_empty() {
            tracing::debug!("Add intern refused with {} invalid fields", errors.len());
            self.ui.add_intern.errors = errors;
            self.set_status("Please fix the highlighted fields", StatusTone::Warning);
            return false;
        }
        self.ui.add_intern.errors.clear();
        self.ui.add_intern.phase = FormPhase::Submitting;
        let latency = self.committer.begin_commit(&self.ui.add_intern.draft);
        self.form_tasks
            .schedule(now, latency, FormTask::CommitFinished);
        self.set_status("Saving intern...", StatusTone::Busy);
        true
    }

    /// Hide the success banner now and clear the form.
    pub fn dismiss_add_intern_success(&mut self) {
        if self.ui.add_intern.phase != FormPhase::Succeeded {
            return;
        }
        if let Some(id) = self.pending_reset.take() {
            self.form_tasks.cancel(id);
        }
        self.reset_add_intern_form();
    }

    /// Leave the form without saving.
    pub fn cancel_add_intern(&mut self) {
        if self.ui.add_intern.phase == FormPhase::Editing {
            self.navigate(Destination::Directory);
        }
    }

    pub(super) fn handle_form_task(&mut self, task: FormTask, now: Instant) {
        match task {
            FormTask::CommitFinished => {
                if self.ui.add_intern.phase != FormPhase::Submitting {
                    return;
                }
                self.ui.add_intern.phase = FormPhase::Succeeded;
                self.pending_reset = Some(self.form_tasks.schedule(
                    now,
                    self.timings.success_reset(),
                    FormTask::ResetAfterSuccess,
                ));
                tracing::info!("Intern draft committed");
                self.set_status("Intern added successfully!", StatusTone::Info);
            }
            FormTask::ResetAfterSuccess => {
                self.pending_reset = None;
                if self.ui.add_intern.phase == FormPhase::Succeeded {
                    self.reset_add_intern_form();
                }
            }
        }
    }

    /// Drop any in-flight save or reset and start from a blank draft.
    pub(super) fn teardown_add_intern(&mut self) {
        let cancelled = self.form_tasks.cancel_all();
        if cancelled > 0 {
            tracing::debug!("Cancelled {cancelled} pending add-intern tasks");
        }
        self.pending_reset = None;
        self.reset_add_intern_form();
    }

    fn reset_add_intern_form(&mut self) {
        self.ui.add_intern = AddInternState::default();
    }
}
