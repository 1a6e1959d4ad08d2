use crate::roster::{InternId, SortState};

/// Search/sort inputs and the cards derived from them.
#[derive(Clone, Debug, Default)]
pub struct DirectoryState {
    /// Case-insensitive text matched against name, department and role.
    pub query: String,
    /// Active sort key and direction.
    pub sort: SortState,
    /// Rebuilt from the roster whenever `query` or `sort` changes.
    pub cards: Vec<InternCardView>,
    /// Set for one frame to move keyboard focus into the search field.
    pub search_focus_requested: bool,
}

/// Render-ready summary of one intern for the card grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InternCardView {
    pub id: InternId,
    pub name: String,
    pub role: String,
    pub department: String,
    /// Start date formatted for the card.
    pub start_label: String,
}
