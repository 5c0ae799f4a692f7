use super::CliModeResult;
use super::dates::entry_filter;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use moodlog_core::{MoodEntry, Store};

pub fn list_mode(cli: &Cli, renderer: &Renderer, store: &Store) -> Result<CliModeResult> {
    let entries = store.load();
    if entries.is_empty() {
        renderer.print_info("No entries yet. Add your first mood record with --add.");
        return Ok(CliModeResult::Finish);
    }

    // Indices shown next to entries are positions in the load order, not in
    // the filtered view; they are what --delete takes.
    let filter = entry_filter(cli);
    let rows: Vec<(usize, &MoodEntry)> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| filter.matches(e))
        .collect();

    if rows.is_empty() {
        renderer.print_info("No entries match the current filters.");
        return Ok(CliModeResult::Finish);
    }

    renderer.print_info(&format!("Showing {} of {} entries.", rows.len(), entries.len()));
    renderer.print_entries(&rows);
    Ok(CliModeResult::Finish)
}
