use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub live_feed: LiveFeedConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LiveFeedConfig {
    /// Period of the simulated "new activity" event
    pub interval_seconds: u64,
    /// How long a freshly pushed activity stays marked as new
    pub highlight_seconds: u64,
    /// Records shown initially and added per "load more"
    pub page_size: usize,
}

impl Default for LiveFeedConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 15,
            highlight_seconds: 3,
            page_size: 10,
        }
    }
}

impl LiveFeedConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds.max(1))
    }

    pub fn highlight(&self) -> Duration {
        Duration::from_secs(self.highlight_seconds)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SeedConfig {
    pub activity_count: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { activity_count: 50 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,
    pub log_dir: String,
    pub file_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            log_dir: "logs".to_string(),
            file_enabled: true,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[live_feed]
interval_seconds = 15
highlight_seconds = 3
page_size = 10

[seed]
activity_count = 50

[logging]
filter = "info"
log_dir = "logs"
file_enabled = true
"#;

const CONFIG_FILE_NAME: &str = "config.toml";

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from a specific file
pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    for candidate in config_candidates() {
        if candidate.exists() {
            return load_config_from(&candidate);
        }
        tracing::debug!("config.toml not found at: {}", candidate.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join(CONFIG_FILE_NAME));
        }
    }
    candidates.push(PathBuf::from(CONFIG_FILE_NAME));
    candidates
}

/// Resolves the log directory; relative paths are taken relative to the executable directory
pub fn get_log_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.logging.log_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }
    Path::new("target").join(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.live_feed.interval_seconds, 15);
        assert_eq!(config.live_feed.highlight(), Duration::from_secs(3));
        assert_eq!(config.live_feed.page_size, 10);
        assert_eq!(config.seed.activity_count, 50);
        assert!(config.logging.file_enabled);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[live_feed]\ninterval_seconds = 5\n").unwrap();
        assert_eq!(config.live_feed.interval(), Duration::from_secs(5));
        assert_eq!(config.live_feed.highlight_seconds, 3);
        assert_eq!(config.seed.activity_count, 50);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config = parse_config("[live_feed]\ninterval_seconds = 0\n").unwrap();
        assert_eq!(config.live_feed.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("[live_feed\n").is_err());
    }
}
