use super::*;

impl EguiController {
    /// Switch screens, tearing down the one being left.
    pub fn navigate(&mut self, destination: Destination) {
        let previous = self.ui.route;
        if previous == destination {
            return;
        }
        if previous == Destination::AddIntern {
            self.teardown_add_intern();
        }
        match destination {
            Destination::Directory => {
                // Search and sort last only as long as one visit to the dashboard.
                self.ui.directory = DirectoryState::default();
                self.close_overlay();
                self.rebuild_directory();
            }
            Destination::HrLogin => self.ui.hr_login = LoginFormState::default(),
            Destination::InternLogin => self.ui.intern_login = LoginFormState::default(),
            Destination::Home | Destination::AddIntern | Destination::InternHome => {}
        }
        self.ui.route = destination;
        tracing::debug!("Navigated from {previous:?} to {destination:?}");
    }

    /// Switch between light and dark mode.
    pub fn toggle_theme(&mut self) {
        self.ui.theme = self.ui.theme.toggled();
    }
}
