use crate::roster::InternId;

/// Detail overlay for a single intern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    /// Only ever holds an id present in the roster.
    Open { id: InternId },
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Intern shown in the overlay, if any.
    pub fn selected_id(&self) -> Option<InternId> {
        match self {
            Self::Open { id } => Some(*id),
            Self::Closed => None,
        }
    }
}
