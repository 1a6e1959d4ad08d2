use super::*;

impl EguiController {
    /// Show the detail overlay for `id`.
    ///
    /// Ids missing from the roster are ignored and leave the overlay as it was.
    pub fn open_intern(&mut self, id: InternId) -> bool {
        if !self.roster.contains(id) {
            tracing::warn!("Ignoring request to open unknown intern {id}");
            return false;
        }
        self.ui.overlay = OverlayState::Open { id };
        true
    }

    /// Dismiss the profile overlay. A no-op when nothing is open.
    pub fn close_overlay(&mut self) {
        self.ui.overlay = OverlayState::Closed;
    }

    /// Record shown in the overlay, if it is open.
    pub fn selected_intern(&self) -> Option<&InternRecord> {
        self.ui
            .overlay
            .selected_id()
            .and_then(|id| self.roster.get(id))
    }

    /// Open the selected intern's photo in the system browser.
    pub fn open_selected_photo(&mut self) {
        let Some(url) = self.selected_intern().map(|intern| intern.photo.clone()) else {
            return;
        };
        if url.is_empty() {
            self.set_status("No photo available", StatusTone::Warning);
            return;
        }
        if let Err(err) = open::that(&url) {
            tracing::warn!("Failed to open {url}: {err}");
            self.set_status(format!("Could not open photo: {err}"), StatusTone::Error);
        }
    }
}
