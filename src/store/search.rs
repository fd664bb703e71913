//! Live substring search over note titles.
//!
//! A non-empty query snapshots the unfiltered collection into the scratch
//! list exactly once per search session, then always filters from that
//! baseline. Typing a narrower query and deleting characters again never
//! loses notes that failed an intermediate match.

use super::NoteStore;
use crate::store::DeleteState;

impl NoteStore {
    /// Applies a search query to the collection.
    ///
    /// - An empty query restores the unfiltered list (in its original order,
    ///   including edits made while filtered) and ends the search session.
    /// - A non-empty query replaces the live view with the subset of the
    ///   baseline whose titles contain the query, case-insensitively.
    ///
    /// Every call closes the editor and discards any pending delete.
    pub fn apply_query(&mut self, query: &str) {
        self.unselect();
        self.pending = DeleteState::Idle;

        if query.is_empty() {
            if let Some(scratch) = self.scratch.take() {
                self.notes = scratch;
                self.needle.clear();
            }
            return;
        }

        if self.notes.is_empty() && self.scratch.is_none() {
            return;
        }

        self.needle = query.to_lowercase();
        let baseline = self.scratch.get_or_insert_with(|| self.notes.clone());
        self.notes = baseline
            .iter()
            .filter(|n| n.title_matches(&self.needle))
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::Note;
    use crate::store::NoteStore;
    use pretty_assertions::assert_eq;

    fn store_with(titles: &[&str]) -> NoteStore {
        NoteStore::from_notes(titles.iter().map(|t| Note::new(*t, "")).collect())
    }

    fn titles(store: &NoteStore) -> Vec<&str> {
        store.notes().iter().map(|n| n.title()).collect()
    }

    #[test]
    fn non_empty_query_filters_by_title_substring() {
        let mut store = store_with(&["Groceries", "Budget", "Grill"]);
        store.apply_query("gr");
        assert_eq!(titles(&store), vec!["Groceries", "Grill"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut store = store_with(&["Groceries", "BUDGET"]);
        store.apply_query("bud");
        assert_eq!(titles(&store), vec!["BUDGET"]);

        store.apply_query("GRO");
        assert_eq!(titles(&store), vec!["Groceries"]);
    }

    #[test]
    fn empty_query_restores_original_order() {
        let mut store = store_with(&["C", "A", "B"]);
        store.apply_query("a");
        store.apply_query("");
        assert_eq!(titles(&store), vec!["C", "A", "B"]);
        assert!(!store.is_filtering());
    }

    #[test]
    fn empty_query_without_active_search_is_noop() {
        let mut store = store_with(&["A"]);
        store.apply_query("");
        assert_eq!(titles(&store), vec!["A"]);
        assert!(!store.is_filtering());
    }

    #[test]
    fn narrower_query_filters_from_original_baseline() {
        let mut store = store_with(&["Groceries", "Garden", "Plans"]);
        store.apply_query("g");
        assert_eq!(titles(&store), vec!["Groceries", "Garden"]);

        // "gro" drops Garden from the view...
        store.apply_query("gro");
        assert_eq!(titles(&store), vec!["Groceries"]);

        // ...but widening again recovers it, because the filter scans the
        // snapshot, not the previously filtered view.
        store.apply_query("g");
        assert_eq!(titles(&store), vec!["Groceries", "Garden"]);
    }

    #[test]
    fn edits_made_while_filtered_survive_restore() {
        let mut store = store_with(&["Groceries", "Budget"]);
        store.apply_query("gro");
        store.select(0);
        store.rename_selected("Groceries (weekly)");
        store.edit_selected_content("milk");

        store.apply_query("");

        assert_eq!(titles(&store), vec!["Groceries (weekly)", "Budget"]);
        assert_eq!(store.notes()[0].content(), "milk");
    }

    #[test]
    fn query_closes_editor_and_deselects() {
        let mut store = store_with(&["Groceries"]);
        store.select(0);
        assert!(store.editor_open());

        store.apply_query("gro");

        assert_eq!(store.selected(), None);
        assert!(!store.editor_open());
        assert!(store.notes().iter().all(|n| !n.is_selected()));
    }

    #[test]
    fn query_discards_pending_delete() {
        let mut store = store_with(&["Groceries"]);
        store.select(0);
        assert!(store.arm_delete());

        store.apply_query("gro");

        assert_eq!(*store.delete_state(), crate::store::DeleteState::Idle);
        // A confirm after the search must not remove anything.
        assert!(store.confirm_delete().is_none());
        assert_eq!(store.authoritative().len(), 1);
    }

    #[test]
    fn both_lists_empty_is_noop() {
        let mut store = NoteStore::new();
        store.apply_query("anything");
        assert!(store.notes().is_empty());
        assert!(!store.is_filtering());
    }

    #[test]
    fn no_match_leaves_empty_view_with_full_snapshot() {
        let mut store = store_with(&["Untitled"]);
        store.apply_query("unt");
        assert_eq!(titles(&store), vec!["Untitled"]);

        store.apply_query("xyz");
        assert!(store.notes().is_empty());
        assert_eq!(store.authoritative().len(), 1);

        store.apply_query("");
        assert_eq!(titles(&store), vec!["Untitled"]);
    }

    #[test]
    fn restore_after_any_query_sequence_returns_original() {
        let mut store = store_with(&["Alpha", "Beta", "Gamma", "Delta"]);
        for query in ["a", "al", "x", "ta", "gamma", ""] {
            store.apply_query(query);
        }
        assert_eq!(titles(&store), vec!["Alpha", "Beta", "Gamma", "Delta"]);
    }
}
