//! Wire codec for the save file.
//!
//! The on-disk format is inherited from earlier versions of the app and is
//! kept byte-compatible: a JSON object mapping decimal string indices to
//! single-entry objects `{"<title>": "<content>"}`, with every byte XOR-ed
//! against a fixed repeating key. The key is an obfuscation, not a security
//! control.

use crate::domain::{Note, NoteId};
use std::collections::BTreeMap;

/// Fixed repeating key applied over the serialized bytes.
const XOR_KEY: &[u8] = b"k@@P*Robfuscated";

/// XORs every byte with the repeating key. Symmetric: applying it twice
/// yields the input.
pub fn apply_key(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .enumerate()
        .map(|(i, b)| b ^ XOR_KEY[i % XOR_KEY.len()])
        .collect()
}

/// Serializes a note collection to obfuscated bytes.
///
/// Index order is the collection order; JSON keys are emitted in numeric
/// order so equal collections encode to equal bytes.
pub fn encode(notes: &[Note]) -> Result<Vec<u8>, serde_json::Error> {
    let map: BTreeMap<u64, BTreeMap<&str, &str>> = notes
        .iter()
        .enumerate()
        .map(|(i, n)| (i as u64, BTreeMap::from([(n.title(), n.content())])))
        .collect();
    Ok(apply_key(&serde_json::to_vec(&map)?))
}

/// Deserializes obfuscated bytes back into a note collection, in index
/// order. Fresh ids are minted; the wire format carries only title/content.
pub fn decode(bytes: &[u8]) -> Result<Vec<Note>, serde_json::Error> {
    let plain = apply_key(bytes);
    let map: BTreeMap<u64, BTreeMap<String, String>> = serde_json::from_slice(&plain)?;
    Ok(map
        .into_values()
        .filter_map(|entry| entry.into_iter().next())
        .map(|(title, content)| Note::with_id(NoteId::new(), title, content))
        .collect())
}
