use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Mood used when the user adds an entry without giving a rating.
const FALLBACK_MOOD: u8 = 7;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where the backing file (`mood_log.csv`) lives.
    pub data_dir: PathBuf,
    /// Mood applied when adding without an explicit rating. Always in [1,10].
    pub default_mood: u8,
    /// Display format for entry timestamps in listings.
    pub date_format: String,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    default_mood: Option<u8>,
    date_format: Option<String>,
}

impl FileConfig {
    fn empty() -> Self {
        Self {
            data_dir: None,
            default_mood: None,
            date_format: None,
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults. A missing or unreadable file yields pure defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|_| FileConfig::empty());

        let data_dir = file_config.data_dir.unwrap_or_else(Self::default_data_dir);

        // Out-of-range values in the file fall back rather than erroring.
        let default_mood = file_config
            .default_mood
            .filter(|m| (1..=10).contains(m))
            .unwrap_or(FALLBACK_MOOD);

        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%A, %d %b %Y %H:%M".to_string());

        Ok(Self {
            data_dir,
            default_mood,
            date_format,
        })
    }

    /// Default data root: `{data_dir}/moodlog`
    /// - macOS:   `~/Library/Application Support/moodlog`
    /// - Linux:   `$XDG_DATA_HOME/moodlog` or `~/.local/share/moodlog`
    /// - Windows: `%APPDATA%\moodlog`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("moodlog");
            p
        } else {
            PathBuf::from("./moodlog")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("moodlog")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("moodlog").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::empty())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::path::Path;

    /// Test helper to create a default `Config` for testing purposes.
    ///
    /// This is the single source of truth for test configuration.
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config(data_dir: PathBuf) -> Config {
        Config {
            data_dir,
            default_mood: 7,
            date_format: "%A, %d %b %Y %H:%M".to_string(),
        }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("moodlog")
                .join("config.toml");
            let expected_native = b.config_dir().join("moodlog").join("config.toml");
            let c = super::Config::config_file_paths();
            assert_eq!(c.get(0), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_data_dir_and_default_mood() {
        let toml = r#"
            data_dir = "/tmp/my-moods"
            default_mood = 5
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(fc.data_dir.as_deref(), Some(Path::new("/tmp/my-moods")));
        assert_eq!(fc.default_mood, Some(5));
        assert!(fc.date_format.is_none());
    }

    #[test]
    fn out_of_range_default_mood_falls_back() {
        let fc = FileConfig {
            data_dir: None,
            default_mood: Some(42),
            date_format: None,
        };
        let mood = fc
            .default_mood
            .filter(|m| (1..=10).contains(m))
            .unwrap_or(FALLBACK_MOOD);
        assert_eq!(mood, 7);
    }

    #[test]
    fn parse_file_rejects_invalid_toml() {
        assert!(super::Config::parse_file("data_dir = [not toml").is_err());
    }
}
