use super::CliModeResult;
use super::dates::entry_filter;
use crate::{cli::Cli, render::Renderer};
use anyhow::{Context, Result};
use moodlog_core::{Store, records};
use std::fs;

pub fn export_mode(cli: &Cli, renderer: &Renderer, store: &Store) -> Result<CliModeResult> {
    let Some(path) = &cli.export else {
        return Ok(CliModeResult::NothingToDo);
    };

    let entries = store.load();
    let subset = if cli.all {
        entries
    } else {
        entry_filter(cli).apply(&entries)
    };

    let csv = records::to_csv_string(&subset)?;
    fs::write(path, csv).with_context(|| format!("writing {}", path.display()))?;
    renderer.print_info(&format!(
        "Exported {} entries to {}.",
        subset.len(),
        path.display()
    ));
    Ok(CliModeResult::Finish)
}
