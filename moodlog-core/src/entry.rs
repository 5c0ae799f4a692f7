use chrono::{NaiveDate, NaiveDateTime};

/// Timestamp layout used in the backing file and exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One mood record. The collection is newest-first; new entries are
/// prepended by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodEntry {
    /// Creation time, set by the store at insertion. Second precision.
    pub timestamp: NaiveDateTime,
    /// Mood rating in [1,10]. Enforced at the input boundary, not here.
    pub mood: u8,
    /// Raw comma-separated tags as the user typed them. May be empty.
    pub tags: String,
    /// Free-text notes. May be empty.
    pub notes: String,
}

impl MoodEntry {
    /// The calendar-date portion of the timestamp.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Normalized tag tokens: split on commas, trimmed, lowercased,
    /// empties dropped. `"Work, Study"` yields `["work", "study"]`.
    pub fn tag_tokens(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn mk_entry(tags: &str) -> MoodEntry {
        MoodEntry {
            timestamp: NaiveDate::from_ymd_opt(2025, 8, 15)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            mood: 7,
            tags: tags.to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn tag_tokens_trim_and_lowercase() {
        let e = mk_entry("Work, Study ,  FAMILY");
        assert_eq!(e.tag_tokens(), vec!["work", "study", "family"]);
    }

    #[test]
    fn tag_tokens_drop_empty_segments() {
        let e = mk_entry("work,, ,study");
        assert_eq!(e.tag_tokens(), vec!["work", "study"]);
    }

    #[test]
    fn tag_tokens_of_empty_field_is_empty() {
        let e = mk_entry("");
        assert!(e.tag_tokens().is_empty());
    }
}
