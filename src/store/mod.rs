//! The note store: an ordered collection with live search, single-note
//! selection, and a confirm-then-commit deletion workflow.
//!
//! The store is the single owner of all mutable session state. The host
//! (the interactive shell, or any other front-end) forwards user actions
//! into these operations and re-reads the accessors to redraw.

mod delete;
mod search;
mod selection;

pub use delete::DeleteState;

use crate::domain::{Note, NoteId};

/// The authoritative ordered collection of notes plus the optional scratch
/// snapshot held while a search is active.
///
/// Invariants:
/// - `scratch` is present iff the last applied query was non-empty, and
///   `needle` then holds that query lowercased.
/// - While `scratch` is present, `notes` holds the filtered view and
///   `scratch` holds the full baseline in its original order.
/// - At most one note in `notes` has its selection flag set, and
///   `editor_open` is true iff `selected` is `Some`.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    scratch: Option<Vec<Note>>,
    needle: String,
    selected: Option<usize>,
    editor_open: bool,
    pending: DeleteState,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store over an existing collection, typically the result of
    /// [`crate::persist::load`].
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Self::default()
        }
    }

    /// Appends a new untitled note and returns its index in the current view,
    /// or `None` when an active filter hides it.
    ///
    /// While a filter is active the note is appended to the scratch snapshot,
    /// and enters the live view only when its title matches the active query.
    /// Either way it survives the restore when the search is cleared.
    pub fn add(&mut self) -> Option<usize> {
        let note = Note::untitled();
        if let Some(scratch) = &mut self.scratch {
            scratch.push(note.clone());
            if !note.title_matches(&self.needle) {
                return None;
            }
        }
        self.notes.push(note);
        Some(self.notes.len() - 1)
    }

    /// Sets the title of the note currently open in the editor.
    ///
    /// No-op when nothing is selected; callers should guard on
    /// [`NoteStore::editor_open`].
    pub fn rename_selected(&mut self, new_title: impl Into<String>) {
        let Some(index) = self.selected else { return };
        let title = new_title.into();
        let id = self.notes[index].id().clone();
        self.notes[index].set_title(title.clone());
        if let Some(copy) = self.scratch_entry_mut(&id) {
            copy.set_title(title);
        }
    }

    /// Sets the content of the note currently open in the editor.
    ///
    /// Same contract as [`NoteStore::rename_selected`].
    pub fn edit_selected_content(&mut self, new_content: impl Into<String>) {
        let Some(index) = self.selected else { return };
        let content = new_content.into();
        let id = self.notes[index].id().clone();
        self.notes[index].set_content(content.clone());
        if let Some(copy) = self.scratch_entry_mut(&id) {
            copy.set_content(content);
        }
    }

    /// Removes the note at `index`, preserving the order of the rest.
    ///
    /// Returns false (and leaves the store untouched) when `index` is out of
    /// range. The matching scratch entry, if any, is removed as well.
    pub fn delete_at(&mut self, index: usize) -> bool {
        if index >= self.notes.len() {
            return false;
        }
        let note = self.notes.remove(index);
        if let Some(scratch) = &mut self.scratch {
            scratch.retain(|n| n.id() != note.id());
        }
        match self.selected {
            Some(sel) if sel == index => {
                self.selected = None;
                self.editor_open = false;
            }
            Some(sel) if sel > index => self.selected = Some(sel - 1),
            _ => {}
        }
        true
    }

    /// Returns the current (possibly filtered) view of the collection.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the index of the note open in the editor, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the note open in the editor, if any.
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.map(|i| &self.notes[i])
    }

    /// Returns whether a note is open in the editor.
    pub fn editor_open(&self) -> bool {
        self.editor_open
    }

    /// Returns whether a search filter is currently applied.
    pub fn is_filtering(&self) -> bool {
        self.scratch.is_some()
    }

    /// Returns the list to persist: the scratch snapshot when a search is
    /// active (and the snapshot is non-empty), otherwise the live list.
    pub fn authoritative(&self) -> &[Note] {
        match &self.scratch {
            Some(scratch) if !scratch.is_empty() => scratch,
            _ => &self.notes,
        }
    }

    fn scratch_entry_mut(&mut self, id: &NoteId) -> Option<&mut Note> {
        self.scratch
            .as_mut()
            .and_then(|scratch| scratch.iter_mut().find(|n| n.id() == id))
    }
}
