//! Core types: Note, Tag, TagColor, NoteId/TagId (ULID), filtering

mod filter;
mod id;
mod note;
mod tag;

pub use filter::{filter_notes, matches_filter};
pub use id::{NoteId, ParseIdError, TagId};
pub use note::{Note, PLACEHOLDER_TITLE};
pub use tag::{DisplayColor, ParseTagError, Tag, TagColor};
