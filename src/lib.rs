//! chrisnotes - tagged text notes with JSON persistence and optional summaries

pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod summarize;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use app::NotesManager;
use cli::{
    Cli, Command, CompletionsArgs,
    config::Config,
    handlers::{
        handle_edit, handle_list, handle_new, handle_remove, handle_select, handle_show,
        handle_summarize, handle_tag, handle_tags, handle_toggle,
    },
};
use infra::JsonStore;
use summarize::HttpSummarizer;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.data_dir.as_ref());
    let store = JsonStore::open(&data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    let summarizer = HttpSummarizer::new(config.summarizer_settings())
        .context("failed to set up summarization client")?;
    let mut manager = NotesManager::load(store, Arc::new(summarizer));

    match &cli.command {
        Command::List(args) => handle_list(args, &mut manager),
        Command::New(args) => handle_new(args, &mut manager),
        Command::Show(args) => handle_show(args, &mut manager),
        Command::Edit(args) => handle_edit(args, &mut manager),
        Command::Remove(args) => handle_remove(args, &mut manager),
        Command::Select(args) => handle_select(args, &mut manager),
        Command::Tags(args) => handle_tags(args, &mut manager),
        Command::Tag(command) => handle_tag(command, &mut manager),
        Command::Toggle(args) => handle_toggle(args, &mut manager),
        Command::Summarize(args) => handle_summarize(args, &mut manager),
        Command::Completions(args) => handle_completions(args),
    }
}

fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    clap_complete::generate(
        args.shell,
        &mut Cli::command(),
        "chrisnotes",
        &mut std::io::stdout(),
    );
    Ok(())
}
