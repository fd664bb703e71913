//! Selection tracking: at most one note open in the editor.

use super::NoteStore;

impl NoteStore {
    /// Opens the note at `index` in the editor, closing any other note first.
    ///
    /// Out-of-range indices are a guarded no-op.
    pub fn select(&mut self, index: usize) {
        if index >= self.notes.len() {
            return;
        }
        self.unselect();
        self.notes[index].set_selected(true);
        self.selected = Some(index);
        self.editor_open = true;
    }

    /// Closes the editor and clears the selection flag, if any.
    pub fn unselect(&mut self) {
        if let Some(index) = self.selected.take() {
            if let Some(note) = self.notes.get_mut(index) {
                note.set_selected(false);
            }
        }
        self.editor_open = false;
    }
}
