use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use moodlog_core::{MoodEntry, Store, query};

/// How many tags the frequency chart shows.
const TOP_TAGS: usize = 15;

pub fn charts_mode(cli: &Cli, renderer: &Renderer, store: &Store) -> Result<CliModeResult> {
    if !cli.charts {
        return Ok(CliModeResult::NothingToDo);
    }

    // Charts always cover the whole collection, never a filtered view.
    let entries = store.load();
    if entries.is_empty() {
        renderer.print_info("No entries yet. Add your first mood record with --add.");
        return Ok(CliModeResult::Finish);
    }

    let mut chronological: Vec<MoodEntry> = entries.clone();
    chronological.sort_by_key(|e| e.timestamp);

    renderer.print_trend(&chronological);
    renderer.print_daily_averages(&query::daily_averages(&entries));
    renderer.print_tag_counts(&query::tag_counts(&entries, TOP_TAGS));
    Ok(CliModeResult::Finish)
}
