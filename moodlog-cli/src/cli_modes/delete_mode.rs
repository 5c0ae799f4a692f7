use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use moodlog_core::Store;

pub fn delete_mode(cli: &Cli, renderer: &Renderer, store: &Store) -> Result<CliModeResult> {
    let Some(index) = cli.delete else {
        return Ok(CliModeResult::NothingToDo);
    };

    let before = store.load().len();
    let entries = store.delete_at(index)?;
    if entries.len() < before {
        renderer.print_info(&format!(
            "Deleted entry {index}. {} entries remain.",
            entries.len()
        ));
    }
    // An out-of-range index is a silent no-op.
    Ok(CliModeResult::Finish)
}
