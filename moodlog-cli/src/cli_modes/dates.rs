use crate::cli::Cli;
use chrono::{Duration, Local, NaiveDate};
use moodlog_core::EntryFilter;

/// Accepted input date formats (parsing only).
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parses a date token: `today`, `yesterday`, or one of [`DATE_FORMATS`].
pub fn parse_date_token(s: &str) -> Option<NaiveDate> {
    let token = s.trim();
    match token.to_lowercase().as_str() {
        "today" => return Some(Local::now().date_naive()),
        "yesterday" => return Some(Local::now().date_naive() - Duration::days(1)),
        _ => {}
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(token, fmt) {
            return Some(d);
        }
    }
    None
}

/// Builds the filter for list and export modes from the CLI flags.
///
/// `--on D` is the single-day range `[D, D]`; `--from` without `--to`
/// completes the range with today. A token that does not parse drops the
/// date criterion entirely, so the user sees unfiltered data instead of an
/// error. An empty `--tag` is ignored the same way.
pub fn entry_filter(cli: &Cli) -> EntryFilter {
    let date_range = resolve_date_range(cli);
    let tag = cli
        .tag
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    EntryFilter { date_range, tag }
}

fn resolve_date_range(cli: &Cli) -> Option<(NaiveDate, NaiveDate)> {
    if let Some(on) = &cli.on {
        let d = parse_date_token(on)?;
        return Some((d, d));
    }
    if let Some(from) = &cli.from {
        let start = parse_date_token(from)?;
        let end = match &cli.to {
            Some(to) => parse_date_token(to)?,
            None => Local::now().date_naive(),
        };
        return Some((start, end));
    }
    None
}
