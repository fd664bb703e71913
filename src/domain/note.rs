//! Note struct: a title/content pair with a selection flag.

use crate::domain::NoteId;
use std::fmt;

/// Default title given to freshly created notes.
pub const UNTITLED: &str = "Untitled";

/// A single note.
///
/// Notes are plain title/content pairs. The `selected` flag marks the note
/// currently open in the editor; the store guarantees at most one note in the
/// live collection carries it at any time.
#[derive(Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    selected: bool,
}

impl Note {
    /// Creates a note with a fresh id.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(NoteId::new(), title, content)
    }

    /// Creates a note with the default title and empty content.
    pub fn untitled() -> Self {
        Self::new(UNTITLED, "")
    }

    /// Creates a note with an explicit id. Used when reconstructing notes
    /// from the save file.
    pub(crate) fn with_id(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            selected: false,
        }
    }

    /// Returns the note's stable identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether this note is open in the editor.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub(crate) fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Case-insensitive substring match against the title.
    pub fn title_matches(&self, lowercase_query: &str) -> bool {
        self.title.to_lowercase().contains(lowercase_query)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("selected", &self.selected)
            .finish()
    }
}
