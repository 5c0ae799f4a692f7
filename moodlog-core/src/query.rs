//! Pure filtering and aggregation over in-memory collections.
//!
//! Nothing here touches the backing file; callers load first and render
//! from whatever these functions return.

use crate::entry::MoodEntry;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Filter criteria for a derived view of the collection.
///
/// Both criteria are optional and compose by logical AND. The date range is
/// inclusive and compares only the calendar-date portion of each entry's
/// timestamp. The tag criterion is a case-insensitive substring match
/// against the raw `tags` field; entries with empty tags never match.
#[derive(Debug, Default, Clone)]
pub struct EntryFilter {
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub tag: Option<String>,
}

impl EntryFilter {
    pub fn apply(&self, entries: &[MoodEntry]) -> Vec<MoodEntry> {
        entries
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }

    /// Whether a single entry satisfies every set criterion. Exposed so
    /// callers that track positional indices can filter without losing them.
    pub fn matches(&self, entry: &MoodEntry) -> bool {
        if let Some((start, end)) = self.date_range {
            let date = entry.date();
            if date < start || date > end {
                return false;
            }
        }
        if let Some(needle) = &self.tag {
            if entry.tags.is_empty() {
                return false;
            }
            if !entry
                .tags
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Mean mood for one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAverage {
    pub date: NaiveDate,
    pub mean: f64,
}

/// Groups entries by calendar date and averages the mood per date,
/// ascending by date.
pub fn daily_averages(entries: &[MoodEntry]) -> Vec<DailyAverage> {
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for entry in entries {
        let slot = by_date.entry(entry.date()).or_insert((0.0, 0));
        slot.0 += entry.mood as f64;
        slot.1 += 1;
    }
    by_date
        .into_iter()
        .map(|(date, (sum, count))| DailyAverage {
            date,
            mean: sum / count as f64,
        })
        .collect()
}

/// How often one normalized tag occurs across the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Counts normalized tag tokens across the whole collection and returns the
/// top `limit` by descending count. Ties break alphabetically so the output
/// is deterministic.
pub fn tag_counts(entries: &[MoodEntry], limit: usize) -> Vec<TagCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for entry in entries {
        for token in entry.tag_tokens() {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    let mut counts: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    counts.truncate(limit);
    counts
}
