use std::time::Duration;

use crate::egui_app::state::InternDraft;

/// Back end receiving validated drafts.
///
/// The form only needs to know how long the commit takes; completion is
/// delivered through the controller's delayed tasks.
pub trait DraftCommitter {
    /// Start committing `draft` and report the latency until it completes.
    fn begin_commit(&mut self, draft: &InternDraft) -> Duration;
}

/// Stand-in that discards the draft after a fixed latency.
///
/// Nothing reaches the roster.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedCommit {
    latency: Duration,
}

impl SimulatedCommit {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl DraftCommitter for SimulatedCommit {
    fn begin_commit(&mut self, draft: &InternDraft) -> Duration {
        tracing::info!(
            "Simulating save for {} ({}), completes in {:?}",
            draft.name.trim(),
            draft.department.trim(),
            self.latency
        );
        self.latency
    }
}
