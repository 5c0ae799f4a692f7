use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use moodlog_core::Store;

pub fn add_mode(cli: &Cli, renderer: &Renderer, store: &Store) -> Result<CliModeResult> {
    if !cli.add && cli.mood.is_none() && cli.tags.is_none() && cli.notes.is_none() {
        return Ok(CliModeResult::NothingToDo);
    }

    let mood = cli.mood.unwrap_or(store.config.default_mood);
    let tags = cli.tags.as_deref().unwrap_or("");
    let notes = cli.notes.as_deref().unwrap_or("");

    let entries = store.add(mood, tags, notes)?;
    renderer.print_info(&format!(
        "Entry added successfully ({} total).",
        entries.len()
    ));
    renderer.print_entry_line(0, &entries[0]);
    Ok(CliModeResult::Finish)
}
