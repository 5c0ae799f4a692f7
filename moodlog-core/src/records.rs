//! CSV codec for the backing file and exports.
//!
//! Column layout: `timestamp,mood,tags,notes`, header row always present,
//! timestamps rendered with [`TIMESTAMP_FORMAT`].

use crate::entry::{MoodEntry, TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

const HEADER: [&str; 4] = ["timestamp", "mood", "tags", "notes"];

/// One row of the backing file, timestamp still a string.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    timestamp: String,
    mood: u8,
    tags: String,
    notes: String,
}

impl Record {
    fn from_entry(entry: &MoodEntry) -> Self {
        Self {
            timestamp: entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            mood: entry.mood,
            tags: entry.tags.clone(),
            notes: entry.notes.clone(),
        }
    }

    fn into_entry(self) -> Result<MoodEntry> {
        let timestamp = NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
            .with_context(|| format!("parsing timestamp '{}'", self.timestamp))?;
        Ok(MoodEntry {
            timestamp,
            mood: self.mood,
            tags: self.tags,
            notes: self.notes,
        })
    }
}

/// Parses a whole CSV document into entries, preserving row order.
/// Any malformed row fails the whole read; the store turns that into an
/// empty collection.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<MoodEntry>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    for row in rdr.deserialize() {
        let record: Record = row.context("reading csv row")?;
        entries.push(record.into_entry()?);
    }
    Ok(entries)
}

/// Writes the full collection as CSV, header row first.
pub fn write_entries<W: Write>(writer: W, entries: &[MoodEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if entries.is_empty() {
        // `serialize` emits the header with the first row; an empty
        // collection still needs the header written explicitly.
        wtr.write_record(HEADER).context("writing csv header")?;
    }
    for entry in entries {
        wtr.serialize(Record::from_entry(entry))
            .context("writing csv row")?;
    }
    wtr.flush().context("flushing csv output")?;
    Ok(())
}

/// Renders the collection as an in-memory CSV document. Used by exports.
pub fn to_csv_string(entries: &[MoodEntry]) -> Result<String> {
    let mut buf = Vec::new();
    write_entries(&mut buf, entries)?;
    String::from_utf8(buf).context("csv output was not utf-8")
}
