//! Note and tag resolution utilities.

use anyhow::{Result, bail};

use crate::app::AppState;
use crate::domain::{Note, NoteId, Tag, TagId};

/// Result of resolving a note or tag identifier.
#[derive(Debug)]
pub enum ResolveResult<T> {
    /// Exactly one item matched.
    Unique(T),
    /// Multiple items matched (ambiguous).
    Ambiguous(Vec<T>),
    /// No items matched.
    NotFound,
}

fn looks_like_id_prefix(identifier: &str) -> bool {
    identifier.len() >= 4 && identifier.chars().all(|c| c.is_ascii_alphanumeric())
}

fn collapse<T>(mut candidates: Vec<T>, key: impl Fn(&T) -> String) -> ResolveResult<T> {
    candidates.sort_by_key(|c| key(c));
    candidates.dedup_by(|a, b| key(a) == key(b));
    match candidates.len() {
        0 => ResolveResult::NotFound,
        1 => match candidates.pop() {
            Some(only) => ResolveResult::Unique(only),
            None => ResolveResult::NotFound,
        },
        _ => ResolveResult::Ambiguous(candidates),
    }
}

/// Resolves a note identifier.
///
/// Resolution order:
/// 1. ID prefix match (if input looks like a ULID prefix)
/// 2. Title match, ignoring case
pub fn resolve_note<'a>(state: &'a AppState, identifier: &str) -> ResolveResult<&'a Note> {
    let identifier = identifier.trim();
    let mut candidates: Vec<&Note> = Vec::new();

    if looks_like_id_prefix(identifier) {
        let id_matches: Vec<&Note> = state
            .notes
            .iter()
            .filter(|n| n.id.matches_prefix(identifier))
            .collect();
        // ID matches are the most precise
        if let [only] = id_matches.as_slice() {
            return ResolveResult::Unique(*only);
        }
        candidates.extend(id_matches);
    }

    let wanted = identifier.to_lowercase();
    candidates.extend(
        state
            .notes
            .iter()
            .filter(|n| n.title().to_lowercase() == wanted),
    );

    collapse(candidates, |n| n.id.to_string())
}

/// Resolves a tag identifier by name (ignoring case) or ID prefix.
pub fn resolve_tag<'a>(state: &'a AppState, identifier: &str) -> ResolveResult<&'a Tag> {
    let identifier = identifier.trim();
    let wanted = identifier.to_lowercase();

    let name_matches: Vec<&Tag> = state
        .tags
        .iter()
        .filter(|t| t.name.to_lowercase() == wanted)
        .collect();
    if let [only] = name_matches.as_slice() {
        return ResolveResult::Unique(*only);
    }

    let mut candidates = name_matches;
    if looks_like_id_prefix(identifier) {
        candidates.extend(state.tags.iter().filter(|t| t.id.matches_prefix(identifier)));
    }

    collapse(candidates, |t| t.id.to_string())
}

/// Resolves a note or fails with a readable error.
pub fn require_note(state: &AppState, identifier: &str) -> Result<NoteId> {
    match resolve_note(state, identifier) {
        ResolveResult::Unique(note) => Ok(note.id),
        ResolveResult::NotFound => bail!("note not found: {}", identifier),
        ResolveResult::Ambiguous(notes) => {
            eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
            for note in &notes {
                eprintln!("  {} - {}", note.id.prefix(), note.title());
            }
            eprintln!();
            eprintln!("Use the ID prefix to specify which note you mean.");
            bail!("ambiguous note identifier: {}", identifier)
        }
    }
}

/// Resolves a tag or fails with a readable error.
pub fn require_tag(state: &AppState, identifier: &str) -> Result<TagId> {
    match resolve_tag(state, identifier) {
        ResolveResult::Unique(tag) => Ok(tag.id),
        ResolveResult::NotFound => bail!("tag not found: {}", identifier),
        ResolveResult::Ambiguous(tags) => {
            eprintln!("Ambiguous: '{}' matches {} tags:", identifier, tags.len());
            for tag in &tags {
                eprintln!("  {} - {} ({})", tag.id.prefix(), tag.name, tag.color);
            }
            eprintln!();
            eprintln!("Use the ID prefix to specify which tag you mean.");
            bail!("ambiguous tag identifier: {}", identifier)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagColor;
    use pretty_assertions::assert_eq;

    fn note(id: &str, content: &str) -> Note {
        let mut note = Note::new();
        note.id = id.parse().unwrap();
        note.content = content.to_string();
        note
    }

    fn tag(id: &str, name: &str) -> Tag {
        let mut tag = Tag::new(name, TagColor::Blue).unwrap();
        tag.id = id.parse().unwrap();
        tag
    }

    fn sample_state() -> AppState {
        AppState {
            notes: vec![
                note("01HQ3K5M7NXJK4QZPW8V2R6T9A", "Groceries\nmilk"),
                note("01HQ3K5M7NXJK4QZPW8V2R6T9B", "Groceries\neggs"),
                note("01JZ0000000000000000000000", "Meeting notes"),
            ],
            tags: vec![
                tag("01HQ3K5M7NXJK4QZPW8V2R6TAA", "Work"),
                tag("01HQ3K5M7NXJK4QZPW8V2R6TAB", "home"),
                tag("01HQ3K5M7NXJK4QZPW8V2R6TAC", "Home"),
            ],
            ..AppState::default()
        }
    }

    #[test]
    fn note_by_unique_id_prefix() {
        let state = sample_state();
        match resolve_note(&state, "01jz") {
            ResolveResult::Unique(n) => assert_eq!(n.title(), "Meeting notes"),
            other => panic!("expected unique, got {other:?}"),
        }
    }

    #[test]
    fn note_by_title_ignoring_case() {
        let state = sample_state();
        match resolve_note(&state, "meeting NOTES") {
            ResolveResult::Unique(n) => assert_eq!(n.title(), "Meeting notes"),
            other => panic!("expected unique, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_titles_are_ambiguous() {
        let state = sample_state();
        match resolve_note(&state, "Groceries") {
            ResolveResult::Ambiguous(notes) => assert_eq!(notes.len(), 2),
            other => panic!("expected ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn shared_id_prefix_is_ambiguous() {
        let state = sample_state();
        assert!(matches!(
            resolve_note(&state, "01HQ3K"),
            ResolveResult::Ambiguous(_)
        ));
    }

    #[test]
    fn unknown_note_not_found() {
        let state = sample_state();
        assert!(matches!(resolve_note(&state, "nothing"), ResolveResult::NotFound));
        assert!(require_note(&state, "nothing").is_err());
    }

    #[test]
    fn tag_by_name_ignoring_case() {
        let state = sample_state();
        let id = require_tag(&state, "work").unwrap();
        assert_eq!(state.tag(id).unwrap().name, "Work");
    }

    #[test]
    fn tags_with_same_name_are_ambiguous() {
        let state = sample_state();
        assert!(matches!(resolve_tag(&state, "HOME"), ResolveResult::Ambiguous(_)));
        assert!(require_tag(&state, "home").is_err());
    }

    #[test]
    fn tag_by_id_prefix() {
        let state = sample_state();
        let id = require_tag(&state, "01HQ3K5M7NXJK4QZPW8V2R6TAC").unwrap();
        assert_eq!(state.tag(id).unwrap().name, "Home");
    }
}
