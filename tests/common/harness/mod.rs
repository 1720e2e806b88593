//! Test harness for CLI integration tests.
//!
//! Provides isolated data directories, seeded notes and tags,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;

#[allow(unused_imports)]
pub use command::NotesCommand;
#[allow(unused_imports)]
pub use env::{TestEnv, TestNote};
