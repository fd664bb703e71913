//! ULID-based note identifier.

use chrono::{DateTime, Utc};
use std::fmt;
use ulid::Ulid;

/// A stable, opaque identifier assigned to a note at creation.
///
/// The id is independent of a note's position in the collection and of its
/// text, so the store can reconcile the live list with the scratch snapshot
/// without guessing by content. ULIDs also encode their creation time, which
/// is how notes get a creation timestamp without carrying one in the save
/// file.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(Ulid);

impl NoteId {
    /// Creates a new NoteId with the current timestamp.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Creates a NoteId from a millisecond timestamp.
    ///
    /// Useful for deterministic ids in tests and benchmarks.
    pub fn from_timestamp_ms(millis: u64) -> Self {
        Self(Ulid::from_parts(millis, 0))
    }

    /// Returns the 10-character prefix of the ULID, used in listings.
    pub fn prefix(&self) -> String {
        self.0.to_string()[..10].to_string()
    }

    /// Returns the time this id was minted.
    pub fn created(&self) -> DateTime<Utc> {
        let millis = self.0.timestamp_ms();
        DateTime::from_timestamp_millis(millis as i64).expect("ULID timestamp should be valid")
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}
