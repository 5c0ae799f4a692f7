pub mod config;
pub mod entry;
pub mod query;
pub mod records;
pub mod store;

pub use config::Config;
pub use entry::MoodEntry;
pub use query::{DailyAverage, EntryFilter, TagCount};
pub use store::Store;
