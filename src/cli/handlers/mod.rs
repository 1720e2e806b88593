//! Command handlers for the CLI.

mod list;
mod metadata;
mod new;
mod resolve;
mod show_edit;
mod summarize;

use crate::app::NotesManager;
use crate::domain::Tag;
use crate::infra::JsonStore;

// Re-export public items
pub use list::handle_list;
pub use metadata::{handle_tag, handle_tags, handle_toggle};
pub use new::{handle_new, handle_remove, handle_select};
pub use resolve::{ResolveResult, require_note, require_tag, resolve_note, resolve_tag};
pub use show_edit::{handle_edit, handle_show};
pub use summarize::handle_summarize;

/// The manager type every handler operates on.
pub type Manager = NotesManager<JsonStore>;

// ===========================================
// Shared Utilities
// ===========================================

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Formats tag names as `[a, b]`, or an empty string for no tags.
pub(crate) fn format_tags(tags: &[&Tag]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    format!("[{}]", names.join(", "))
}
