use super::charts::{MOOD_MAX, bar, sparkline};
use super::theme::OneDark;
use moodlog_core::{DailyAverage, MoodEntry, TagCount};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

/// Width of the horizontal bars in the daily-average and tag charts.
const BAR_WIDTH: usize = 30;

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%A, %d %b %Y %H:%M".to_string(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// One-line rendering of an entry, prefixed with its positional index.
    pub fn print_entry_line(&self, index: usize, entry: &MoodEntry) {
        let mut idx = format!("[{index}]");
        let mut date = entry.timestamp.format("%Y-%m-%d %H:%M").to_string();
        let mut mood = format!("mood {}/10", entry.mood);
        let mut tags = String::new();
        if !entry.tags.is_empty() {
            tags = format!("[{}]", entry.tag_tokens().join(", "));
        }
        if self.opts.use_color {
            idx = idx.with(Color::DarkGrey).to_string();
            date = date.with(Color::Cyan).to_string();
            mood = mood.with(Color::Yellow).to_string();
            tags = tags.with(Color::Green).to_string();
        }
        println!("{} {} - {} {}", idx, date, mood, tags);
    }

    /// Renders the filtered listing. Each row carries the entry's position
    /// in the load order, which is what deletion takes.
    pub fn print_entries(&self, rows: &[(usize, &MoodEntry)]) {
        for (i, &(index, entry)) in rows.iter().enumerate() {
            if self.opts.short_mode {
                self.print_entry_line(index, entry);
                continue;
            }

            let date = entry.timestamp.format(&self.opts.date_format).to_string();
            let heading = format!("## [{index}] {date} - Mood {}/10", entry.mood);

            let mut md = format!("{heading}\n");
            if !entry.tags.is_empty() {
                md.push_str(&format!("**Tags:** {}\n\n", entry.tags.trim()));
            }
            if !entry.notes.trim().is_empty() {
                md.push_str(&format!("{}\n", entry.notes.trim_end()));
            }

            self.print_md(&md);
            if i + 1 < rows.len() {
                println!();
            }
            self.print_md("---");
        }
    }

    /// Mood over time as a sparkline, oldest entry first.
    pub fn print_trend(&self, chronological: &[MoodEntry]) {
        self.print_md("# Mood trend over time");
        let moods: Vec<u8> = chronological.iter().map(|e| e.mood).collect();
        println!("{}", sparkline(&moods));
        if let (Some(first), Some(last)) = (chronological.first(), chronological.last()) {
            println!(
                "{} .. {}  ({} entries, scale 1-10)",
                first.timestamp.format("%Y-%m-%d"),
                last.timestamp.format("%Y-%m-%d"),
                chronological.len()
            );
        }
        println!();
    }

    pub fn print_daily_averages(&self, averages: &[DailyAverage]) {
        self.print_md("# Daily average mood");
        for avg in averages {
            println!(
                "{}  {:<width$}  {:.1}",
                avg.date.format("%Y-%m-%d"),
                bar(avg.mean, MOOD_MAX, BAR_WIDTH),
                avg.mean,
                width = BAR_WIDTH
            );
        }
        println!();
    }

    pub fn print_tag_counts(&self, counts: &[TagCount]) {
        self.print_md("# Most common tags");
        if counts.is_empty() {
            println!("No tags available yet.");
            return;
        }
        let tag_width = counts.iter().map(|c| c.tag.chars().count()).max().unwrap_or(0);
        let max_count = counts.iter().map(|c| c.count).max().unwrap_or(0);
        for c in counts {
            println!(
                "{:<tag_width$}  {:<width$}  {}",
                c.tag,
                bar(c.count as f64, max_count as f64, BAR_WIDTH),
                c.count,
                width = BAR_WIDTH
            );
        }
    }
}
