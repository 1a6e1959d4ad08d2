//! Shared state types for the egui UI.

mod add_intern;
mod directory;
mod login;
mod navigation;
mod overlay;
mod status;
mod theme;

pub use add_intern::*;
pub use directory::*;
pub use login::*;
pub use navigation::*;
pub use overlay::*;
pub use status::*;
pub use theme::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub theme: ThemeMode,
    /// Screen currently shown in the central panel.
    pub route: Destination,
    pub directory: DirectoryState,
    pub overlay: OverlayState,
    pub add_intern: AddInternState,
    pub hr_login: LoginFormState,
    pub intern_login: LoginFormState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            theme: ThemeMode::default(),
            route: Destination::default(),
            directory: DirectoryState::default(),
            overlay: OverlayState::default(),
            add_intern: AddInternState::default(),
            hr_login: LoginFormState::default(),
            intern_login: LoginFormState::default(),
        }
    }
}
