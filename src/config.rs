//! Configuration loading for the YouTube command-line samples.
//!
//! Reads the Data API developer key from a `youtube.properties` file in
//! Java properties syntax (key=value lines with `#`/`!` comments).

use crate::error::{Error, Result};
use dirs::config_dir;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the properties resource both samples read.
pub const PROPERTIES_FILENAME: &str = "youtube.properties";

/// Property key holding the developer API key.
pub const API_KEY_PROPERTY: &str = "youtube.apikey";

/// Application configuration.
///
/// Holds the API key plus the raw property map for any additional keys.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// YouTube Data API v3 key
    pub api_key: String,
    /// All key/value pairs from the properties file
    pub properties: HashMap<String, String>,
}

impl Config {
    /// Load configuration from a properties file.
    ///
    /// # Arguments
    /// * `path` - Optional path to the properties file. If None, uses default locations.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or a configuration error
    ///
    /// # Details
    /// Searches for the properties file in:
    /// 1. Provided path (if given)
    /// 2. `./youtube.properties` in the current directory
    /// 3. `$XDG_CONFIG_HOME/yt-cli/youtube.properties`
    ///
    /// A missing file or a missing/empty `youtube.apikey` key is an error;
    /// the binaries treat it as fatal and exit with code 1.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::resolve_path()?
        };

        let content = fs::read_to_string(&config_path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", config_path.display(), e))
        })?;

        let properties = parse_properties(&content);

        let api_key = properties
            .get(API_KEY_PROPERTY)
            .filter(|key| !key.is_empty())
            .cloned()
            .ok_or_else(|| {
                Error::Config(format!(
                    "{} does not define a non-empty \"{}\" key",
                    config_path.display(),
                    API_KEY_PROPERTY
                ))
            })?;

        Ok(Self {
            api_key,
            properties,
        })
    }

    /// Look up an arbitrary property value.
    ///
    /// # Arguments
    /// * `key` - Property key
    ///
    /// # Returns
    /// * `Option<&str>` - Value if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Get the default configuration file path under the user config directory.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/yt-cli/youtube.properties` or error
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = config_dir()
            .ok_or_else(|| Error::Config("failed to determine config directory".to_string()))?;
        Ok(config_dir.join("yt-cli").join(PROPERTIES_FILENAME))
    }

    /// Resolve the properties file location when no explicit path is given.
    ///
    /// # Details
    /// Prefers `./youtube.properties`; falls back to the user config
    /// directory. The fallback path is returned even when absent so the
    /// read failure names the location the user should create.
    fn resolve_path() -> Result<PathBuf> {
        let local = PathBuf::from(PROPERTIES_FILENAME);
        if local.exists() {
            return Ok(local);
        }
        Self::default_config_path()
    }
}

/// Parse Java properties syntax into a key/value map.
///
/// # Arguments
/// * `content` - File contents
///
/// # Returns
/// * `HashMap<String, String>` - Parsed pairs
///
/// # Details
/// Blank lines and lines starting with `#` or `!` are skipped. Each
/// remaining line splits on its first `=` or `:`; key and value are
/// trimmed of surrounding whitespace. Later duplicates win.
fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        if let Some(pos) = line.find(['=', ':']) {
            let key = line[..pos].trim();
            let value = line[pos + 1..].trim();
            if !key.is_empty() {
                properties.insert(key.to_string(), value.to_string());
            }
        }
    }

    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_api_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PROPERTIES_FILENAME);
        fs::write(&path, "youtube.apikey=AIzaTestKey123\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api_key, "AIzaTestKey123");
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.properties");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("nope.properties"));
    }

    #[test]
    fn test_load_missing_api_key_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PROPERTIES_FILENAME);
        fs::write(&path, "other.key=value\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(API_KEY_PROPERTY));
    }

    #[test]
    fn test_load_empty_api_key_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PROPERTIES_FILENAME);
        fs::write(&path, "youtube.apikey=\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_parse_properties_skips_comments_and_blanks() {
        let content = "# leading comment\n\n! bang comment\nyoutube.apikey=abc\n";
        let properties = parse_properties(content);
        assert_eq!(properties.len(), 1);
        assert_eq!(properties["youtube.apikey"], "abc");
    }

    #[test]
    fn test_parse_properties_colon_separator_and_trimming() {
        let content = "youtube.apikey : abc \n  spaced.key =  value with spaces  \n";
        let properties = parse_properties(content);
        assert_eq!(properties["youtube.apikey"], "abc");
        assert_eq!(properties["spaced.key"], "value with spaces");
    }

    #[test]
    fn test_parse_properties_splits_on_first_separator() {
        let properties = parse_properties("url=https://example.com/a=b\n");
        assert_eq!(properties["url"], "https://example.com/a=b");
    }

    #[test]
    fn test_get_returns_additional_properties() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PROPERTIES_FILENAME);
        fs::write(&path, "youtube.apikey=abc\nyoutube.channel=UCtest\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.get("youtube.channel"), Some("UCtest"));
        assert_eq!(config.get("missing"), None);
    }
}
