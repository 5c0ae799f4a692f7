mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use cli_modes::{
    CliModeResult, add_mode, charts_mode, clear_mode, delete_mode, export_mode, list_mode,
};
use moodlog_core::Store;
use render::{ColorMode, RenderOptions, Renderer};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("moodlog: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = Store::new()?;

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: store.config.date_format.to_string(),
        use_color,
        short_mode: cli.style == cli::Style::Short,
    }));

    if cli.path {
        renderer.print_info(&format!("{}", store.data_file().display()));
        return Ok(());
    }

    if let CliModeResult::Finish = clear_mode(&cli, &renderer, &store)? {
        return Ok(());
    }

    if let CliModeResult::Finish = delete_mode(&cli, &renderer, &store)? {
        return Ok(());
    }

    if let CliModeResult::Finish = add_mode(&cli, &renderer, &store)? {
        return Ok(());
    }

    if let CliModeResult::Finish = charts_mode(&cli, &renderer, &store)? {
        return Ok(());
    }

    if let CliModeResult::Finish = export_mode(&cli, &renderer, &store)? {
        return Ok(());
    }

    // List mode is the default; it always finishes.
    list_mode(&cli, &renderer, &store)?;
    Ok(())
}
