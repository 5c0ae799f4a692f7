//! The record store: a handle on the single CSV backing file.

use crate::config::Config;
use crate::entry::MoodEntry;
use crate::records;
use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// File name of the backing file inside the data directory.
const DATA_FILE_NAME: &str = "mood_log.csv";

/// The central struct for all record operations.
///
/// A `Store` holds the configuration and the backing-file path. Every
/// mutation rewrites the whole file and returns the new collection, so
/// callers re-render from the returned value.
#[derive(Debug)]
pub struct Store {
    pub config: Config,
    data_file: PathBuf,
}

impl Store {
    /// Creates a new `Store`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Store` with a specific `Config`.
    ///
    /// This also ensures that the data directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("creating {}", config.data_dir.display()))?;
        let data_file = config.data_dir.join(DATA_FILE_NAME);
        Ok(Self { config, data_file })
    }

    /// Path of the backing file.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Reads the full collection from the backing file, newest first.
    ///
    /// A missing file is an empty collection. So is an unreadable or
    /// malformed one: a corrupt backing file degrades to "no entries"
    /// rather than an error the caller has to handle.
    pub fn load(&self) -> Vec<MoodEntry> {
        self.try_load().unwrap_or_default()
    }

    fn try_load(&self) -> Result<Vec<MoodEntry>> {
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.data_file)
            .with_context(|| format!("opening {}", self.data_file.display()))?;
        records::read_entries(BufReader::new(file))
    }

    /// Rewrites the backing file with the full collection, header row first.
    pub fn save(&self, entries: &[MoodEntry]) -> Result<()> {
        let file = File::create(&self.data_file)
            .with_context(|| format!("writing {}", self.data_file.display()))?;
        records::write_entries(file, entries)
    }

    /// Adds a new entry stamped with the current local time, prepends it to
    /// the collection, saves, and returns the new full collection.
    ///
    /// The timestamp is truncated to whole seconds so the returned
    /// collection equals what a reload would produce.
    pub fn add(&self, mood: u8, tags: &str, notes: &str) -> Result<Vec<MoodEntry>> {
        let now = Local::now().naive_local();
        let timestamp = now.with_nanosecond(0).unwrap_or(now);
        let entry = MoodEntry {
            timestamp,
            mood,
            tags: tags.to_string(),
            notes: notes.to_string(),
        };

        let mut entries = self.load();
        entries.insert(0, entry);
        self.save(&entries)?;
        Ok(entries)
    }

    /// Removes the entry at `index` (positional, in current load order),
    /// saves, and returns the result. An out-of-range index returns the
    /// collection unchanged without touching the file.
    pub fn delete_at(&self, index: usize) -> Result<Vec<MoodEntry>> {
        let mut entries = self.load();
        if index < entries.len() {
            entries.remove(index);
            self.save(&entries)?;
        }
        Ok(entries)
    }

    /// Removes the backing file entirely if it exists.
    pub fn clear(&self) -> Result<()> {
        if self.data_file.exists() {
            fs::remove_file(&self.data_file)
                .with_context(|| format!("removing {}", self.data_file.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::mk_config;
    use std::fs;
    use tempfile::tempdir;

    fn mk_store_with_default() -> (Store, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("moodlog");
        let cfg = mk_config(root);
        let store = Store::with_config(cfg).unwrap();
        (store, tmp)
    }

    #[test]
    fn add_then_load_round_trips_fields() {
        let (store, _tmp) = mk_store_with_default();
        let before = Local::now().naive_local().with_nanosecond(0).unwrap();

        store.add(4, "work, study", "rough day").unwrap();
        let after = Local::now().naive_local();

        let entries = store.load();
        assert_eq!(entries.len(), 1);
        let first = &entries[0];
        assert_eq!(first.mood, 4);
        assert_eq!(first.tags, "work, study");
        assert_eq!(first.notes, "rough day");
        assert!(first.timestamp >= before);
        assert!(first.timestamp <= after);
    }

    #[test]
    fn add_prepends_newest_first() {
        let (store, _tmp) = mk_store_with_default();
        store.add(3, "old", "").unwrap();
        let entries = store.add(9, "new", "").unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tags, "new");
        assert_eq!(entries[1].tags, "old");
        assert_eq!(store.load(), entries);
    }

    #[test]
    fn delete_at_removes_exactly_one() {
        let (store, _tmp) = mk_store_with_default();
        store.add(5, "a", "").unwrap();
        store.add(6, "b", "").unwrap();
        store.add(7, "c", "").unwrap();

        let entries = store.delete_at(1).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tags, "c");
        assert_eq!(entries[1].tags, "a");
    }

    #[test]
    fn delete_at_twice_with_shifted_index_removes_two_distinct() {
        let (store, _tmp) = mk_store_with_default();
        store.add(5, "a", "").unwrap();
        store.add(6, "b", "").unwrap();
        store.add(7, "c", "").unwrap();

        // Deleting positions 0 and 1 of the original order: after the first
        // delete, the old index 2 has shifted to 1.
        store.delete_at(0).unwrap();
        let entries = store.delete_at(1).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tags, "b");
    }

    #[test]
    fn delete_at_out_of_range_leaves_file_unchanged() {
        let (store, _tmp) = mk_store_with_default();
        store.add(5, "a", "").unwrap();
        let before = fs::read(store.data_file()).unwrap();

        let entries = store.delete_at(5).unwrap();
        assert_eq!(entries.len(), 1);

        let after = fs::read(store.data_file()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn save_after_load_is_idempotent() {
        let (store, _tmp) = mk_store_with_default();
        store.add(5, "work", "first").unwrap();
        store.add(8, "family", "second").unwrap();

        let loaded = store.load();
        store.save(&loaded).unwrap();
        assert_eq!(store.load(), loaded);
    }

    #[test]
    fn clear_then_load_is_empty() {
        let (store, _tmp) = mk_store_with_default();
        store.add(5, "work", "").unwrap();
        assert!(store.data_file().exists());

        store.clear().unwrap();
        assert!(!store.data_file().exists());
        assert!(store.load().is_empty());
    }

    #[test]
    fn clear_without_backing_file_is_a_no_op() {
        let (store, _tmp) = mk_store_with_default();
        store.clear().unwrap();
    }

    #[test]
    fn load_with_missing_file_is_empty() {
        let (store, _tmp) = mk_store_with_default();
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_with_malformed_file_is_empty() {
        let (store, _tmp) = mk_store_with_default();
        fs::write(
            store.data_file(),
            "timestamp,mood,tags,notes\nnot-a-date,high,work,\n",
        )
        .unwrap();

        assert!(store.load().is_empty());
    }
}
