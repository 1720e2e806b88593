//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// chrisnotes - tagged text notes with optional summaries
#[derive(Parser, Debug)]
#[command(name = "chrisnotes", version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes, optionally filtered by tags
    #[command(name = "ls")]
    List(ListArgs),

    /// Create a new note
    New(NewArgs),

    /// Show a note's contents
    Show(ShowArgs),

    /// Replace a note's contents
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Select a note
    Select(SelectArgs),

    /// List all tags
    Tags(TagsArgs),

    /// Create, delete, rename or recolor a tag
    #[command(subcommand)]
    Tag(TagCommand),

    /// Attach a tag to a note, or detach it if already attached
    Toggle(ToggleArgs),

    /// Summarize a note with the configured service
    Summarize(SummarizeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Filter by tag name (can be specified multiple times; any match shows the note)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Initial content
    pub content: Option<String>,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID prefix or title
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID prefix or title
    pub note: String,

    /// New content
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    pub content: Option<String>,

    /// Read new content from standard input
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Note ID prefix or title
    pub note: String,
}

/// Arguments for the `select` command
#[derive(Parser, Debug)]
pub struct SelectArgs {
    /// Note ID prefix or title
    pub note: String,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum TagCommand {
    /// Create a tag
    Add(TagAddArgs),

    /// Delete a tag and detach it from every note
    #[command(name = "rm")]
    Remove(TagRemoveArgs),

    /// Rename a tag
    Rename(TagRenameArgs),

    /// Change a tag's color
    Color(TagColorArgs),
}

/// Arguments for `tag add`
#[derive(Parser, Debug)]
pub struct TagAddArgs {
    /// Tag name
    pub name: String,

    /// Color: red, orange, yellow, green, blue, purple or gray
    #[arg(short, long, default_value = "blue")]
    pub color: String,
}

/// Arguments for `tag rm`
#[derive(Parser, Debug)]
pub struct TagRemoveArgs {
    /// Tag name or ID prefix
    pub tag: String,
}

/// Arguments for `tag rename`
#[derive(Parser, Debug)]
pub struct TagRenameArgs {
    /// Tag name or ID prefix
    pub tag: String,

    /// New name
    pub name: String,
}

/// Arguments for `tag color`
#[derive(Parser, Debug)]
pub struct TagColorArgs {
    /// Tag name or ID prefix
    pub tag: String,

    /// New color
    pub color: String,
}

/// Arguments for the `toggle` command
#[derive(Parser, Debug)]
pub struct ToggleArgs {
    /// Note ID prefix or title
    pub note: String,

    /// Tag name or ID prefix
    pub tag: String,
}

/// Arguments for the `summarize` command
#[derive(Parser, Debug)]
pub struct SummarizeArgs {
    /// Note ID prefix or title (defaults to the selected note)
    pub note: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
