use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use moodlog_core::Store;

pub fn clear_mode(cli: &Cli, renderer: &Renderer, store: &Store) -> Result<CliModeResult> {
    if !cli.clear {
        return Ok(CliModeResult::NothingToDo);
    }

    store.clear()?;
    renderer.print_info("All mood data cleared.");
    Ok(CliModeResult::Finish)
}
