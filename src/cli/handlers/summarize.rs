//! Summarize command handler.

use anyhow::{Context, Result};

use super::Manager;
use super::resolve::require_note;
use crate::cli::SummarizeArgs;

pub fn handle_summarize(args: &SummarizeArgs, manager: &mut Manager) -> Result<()> {
    if let Some(identifier) = &args.note {
        let id = require_note(manager.state(), identifier)?;
        manager.select_note(Some(id));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let job = match manager.begin_summary() {
        Ok(job) => job,
        Err(reason) => {
            println!("Nothing to summarize: {}", reason);
            return Ok(());
        }
    };
    let note_id = job.note_id();
    let outcome = runtime.block_on(async move { job.spawn().join().await });

    if manager.finish_summary(outcome) {
        if let Some(summary) = manager.note(note_id).and_then(|n| n.summary.as_deref()) {
            println!("Summary: {}", summary);
        }
    } else {
        println!("No summary generated.");
    }
    Ok(())
}
