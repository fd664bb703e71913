//! Confirm-then-commit deletion workflow.

use std::mem;

use super::NoteStore;
use crate::domain::{Note, NoteId};

/// State of the deletion workflow.
///
/// A pending delete is keyed by the armed note's id rather than its index or
/// text, so the commit removes exactly the note the user confirmed even if
/// the view shifted in between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteState {
    /// No delete is pending.
    #[default]
    Idle,
    /// A delete has been requested and awaits confirmation.
    ConfirmPending { id: NoteId },
}

impl NoteStore {
    /// Arms a delete for the note currently open in the editor.
    ///
    /// Returns false when no note is selected. Arming while another delete is
    /// pending overwrites the prior pending action; there is no queue.
    pub fn arm_delete(&mut self) -> bool {
        let Some(index) = self.selected else {
            return false;
        };
        self.pending = DeleteState::ConfirmPending {
            id: self.notes[index].id().clone(),
        };
        true
    }

    /// Commits the pending delete.
    ///
    /// Removes the armed note from the live list and from the scratch
    /// snapshot, closes the editor, and returns the removed note so the host
    /// can report it. Returns `None` when nothing was pending or the armed
    /// note no longer exists; either way the workflow ends up idle.
    pub fn confirm_delete(&mut self) -> Option<Note> {
        let pending = mem::take(&mut self.pending);
        let DeleteState::ConfirmPending { id } = pending else {
            return None;
        };
        let position = self.notes.iter().position(|n| n.id() == &id)?;
        self.unselect();
        let removed = self.notes.remove(position);
        if let Some(scratch) = &mut self.scratch {
            scratch.retain(|n| n.id() != &id);
        }
        Some(removed)
    }

    /// Discards the pending delete without mutating the collection.
    pub fn cancel_delete(&mut self) {
        self.pending = DeleteState::Idle;
    }

    /// Returns the current state of the deletion workflow.
    pub fn delete_state(&self) -> &DeleteState {
        &self.pending
    }
}
