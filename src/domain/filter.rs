//! Tag-based note filtering.

use crate::domain::{Note, TagId};
use std::collections::BTreeSet;

/// Returns the notes visible under `filter`.
///
/// An empty filter shows every note. Otherwise a note is shown when it carries
/// at least one of the filter's tags. Collection order is preserved.
pub fn filter_notes<'a>(notes: &'a [Note], filter: &BTreeSet<TagId>) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| matches_filter(note, filter))
        .collect()
}

/// Returns true if `note` is visible under `filter`.
pub fn matches_filter(note: &Note, filter: &BTreeSet<TagId>) -> bool {
    filter.is_empty() || !note.tag_ids.is_disjoint(filter)
}
