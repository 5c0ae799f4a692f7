use clap::{ArgGroup, Parser, ValueEnum};

use crate::render::ColorMode;

/// moodlog — track your mood, add notes, and visualize trends over time
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("add_mode").args(["add", "mood", "tags", "notes"]).multiple(true)),
    group(ArgGroup::new("read_mode").args(["on", "from", "to", "tag", "export", "all"]).multiple(true).conflicts_with("add_mode")),
    group(ArgGroup::new("solo").args(["path", "delete", "clear", "charts"]).conflicts_with_all(["add_mode", "read_mode"])),
)]
pub struct Cli {
    /// Prints the backing-file location
    #[arg(long, short)]
    pub path: bool,

    /// Adds a new entry (mood defaults to the configured value, usually 7)
    #[arg(long, short)]
    pub add: bool,
    /// Mood rating for the new entry, 1 (low) to 10 (high)
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub mood: Option<u8>,
    /// Comma-separated tags for the new entry (e.g. `--tags "work, study"`)
    #[arg(long, short)]
    pub tags: Option<String>,
    /// Free-text notes for the new entry
    #[arg(long, short)]
    pub notes: Option<String>,

    /// View entries on a specific date (e.g. `moodlog --on yesterday`, `moodlog --on 2025-08-15`)
    #[arg(long)]
    pub on: Option<String>,
    /// View entries from, or on, this date
    #[arg(long, conflicts_with = "on")]
    pub from: Option<String>,
    /// End of the date range; only meaningful together with `--from`
    #[arg(long, conflicts_with = "on", requires = "from")]
    pub to: Option<String>,
    /// Only show entries whose tags contain this text (case-insensitive)
    #[arg(long)]
    pub tag: Option<String>,

    /// Deletes the entry at this position in the current listing order
    #[arg(long, short)]
    pub delete: Option<usize>,
    /// Renders the mood trend, daily averages and top tags
    #[arg(long, short)]
    pub charts: bool,
    /// Writes the filtered entries as CSV to this file
    #[arg(long, short)]
    pub export: Option<std::path::PathBuf>,
    /// Export the full collection instead of the filtered view
    #[arg(long, requires = "export")]
    pub all: bool,
    /// Deletes the backing file and all entries in it. There is no undo.
    #[arg(long)]
    pub clear: bool,

    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Output style: "long" shows tags and notes, "short" one line per entry.
    #[arg(long, short, value_enum, env = "MOODLOG_STYLE", default_value_t = Style::Long)]
    pub style: Style,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Style {
    Long,
    Short,
}
