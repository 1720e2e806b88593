//! File I/O and JSON persistence

mod fs;
mod store;

pub use fs::{StoreError, ensure_dir, read_json, write_json};
pub use store::{
    JsonStore, NOTES_FILE, SELECTED_NOTE_KEY, SETTINGS_FILE, Store, TAGS_FILE,
};
