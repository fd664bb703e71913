//! Core types: Note and NoteId (ULID)

mod note;
mod note_id;

pub use note::{Note, UNTITLED};
pub use note_id::NoteId;
