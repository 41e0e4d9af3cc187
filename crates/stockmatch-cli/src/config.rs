use anyhow::{anyhow, Context, Result};
use confyg::{env, Confygery};
use serde::Deserialize;
use std::path::PathBuf;
use stockmatch_search::{RankOptions, DEFAULT_IMAGE_URL};

/// Configuration for stockmatch.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (STOCK_* prefix)
/// 3. Config file (~/.config/stockmatch/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Dataset to load instead of the bundled catalog.
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/images.json
    /// - ENV: STOCK_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/images.json"
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Image reference returned when nothing matches.
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,

    /// Drop matches farther than this edit distance.
    #[serde(default)]
    pub max_distance: Option<usize>,

    /// Return at most this many image references.
    #[serde(default)]
    pub max_results: Option<usize>,

    /// Log level: trace, debug, info, warn or error.
    ///
    /// Can be set via:
    /// - CLI: --log-level debug
    /// - ENV: STOCK_LOG_LEVEL
    #[serde(default = "default_log_level")]
    pub log_level: twyg::LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            fallback_image: default_fallback_image(),
            max_distance: None,
            max_results: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/stockmatch/config.toml
    /// Reads environment variables with STOCK_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("stock");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, then apply CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or `log_level` is not a known level.
    pub fn load_with_overrides(
        catalog_path: Option<PathBuf>,
        log_level: Option<&str>,
    ) -> Result<Self> {
        let log_level = log_level.map(parse_log_level).transpose()?;
        Ok(Self::load()?.with_overrides(catalog_path, log_level))
    }

    #[must_use]
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        log_level: Option<twyg::LogLevel>,
    ) -> Self {
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }

    /// Ranking limits derived from this configuration.
    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            max_distance: self.max_distance,
            limit: self.max_results,
        }
    }
}

fn default_fallback_image() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

fn default_log_level() -> twyg::LogLevel {
    twyg::LogLevel::Info
}

/// Parse a level name such as "debug" given on the command line.
pub fn parse_log_level(value: &str) -> Result<twyg::LogLevel> {
    value
        .parse::<twyg::LogLevel>()
        .map_err(|e| anyhow!("Invalid log level {:?}: {:?}", value, e))
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/stockmatch/config.toml
/// - macOS: ~/Library/Application Support/stockmatch/config.toml
/// - Windows: %APPDATA%\stockmatch\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stockmatch")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Stockmatch Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (STOCK_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Dataset to search instead of the bundled catalog.
# Format: {"images": [{"title": ..., "tags": [...], "source": ..., "image": ...}]}
#
# Can also be set via:
# - CLI: stockmatch --catalog /path/to/images.json tags birthday
# - Environment: STOCK_CATALOG_PATH=/path/to/images.json
#catalog_path = "/path/to/images.json"

# Image returned when no catalog entry matches the query
#fallback_image = "https://example.com/default.jpg"

# Drop matches whose edit distance from the query exceeds this value
#max_distance = 40

# Return at most this many images per query
#max_results = 5

# Log level: trace, debug, info, warn, error
log_level = "info"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
