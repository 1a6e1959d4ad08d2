use super::*;
use crate::roster::query;

impl EguiController {
    /// Apply a new search query and rebuild the visible cards.
    pub fn set_directory_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.ui.directory.query == query {
            return;
        }
        self.ui.directory.query = query;
        self.rebuild_directory();
    }

    /// Handle a click on a sort control.
    pub fn select_sort_key(&mut self, key: SortKey) {
        self.ui.directory.sort.select(key);
        tracing::debug!(
            "Directory sorted by {:?} {:?}",
            self.ui.directory.sort.key,
            self.ui.directory.sort.direction
        );
        self.rebuild_directory();
    }

    /// Ask the view to focus the search field on its next frame.
    pub fn focus_directory_search(&mut self) {
        self.ui.directory.search_focus_requested = true;
    }

    pub fn visible_intern_count(&self) -> usize {
        self.ui.directory.cards.len()
    }

    /// Ids of the visible cards in display order.
    pub fn visible_intern_ids(&self) -> Vec<InternId> {
        self.ui.directory.cards.iter().map(|card| card.id).collect()
    }

    /// Recompute the cards from scratch using the current query and sort.
    pub(crate) fn rebuild_directory(&mut self) {
        let directory = &self.ui.directory;
        let visible = query::render(
            self.roster.records(),
            &directory.query,
            directory.sort.key,
            directory.sort.direction,
        );
        self.ui.directory.cards = visible.into_iter().map(view_model::intern_card).collect();
    }
}
