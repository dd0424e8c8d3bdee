use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for cartel.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CARTEL_* prefix)
/// 3. Config file (~/.config/cartel/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Festival source, one `name:venue:dd-mm-yyyy:days:style...` per line.
    ///
    /// Can be set via:
    /// - CLI: --file /path/to/festivales.csv
    /// - ENV: CARTEL_FESTIVALS_PATH
    /// - Config: festivals_path = "/path/to/festivales.csv"
    /// - Default: ~/.local/share/cartel/festivales.csv
    pub festivals_path: PathBuf,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "cartel=debug").
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            festivals_path: default_festivals_path(),
            log_level: String::from("info"),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
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

        let env_opts = env::Options::with_top_level("cartel");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration, overriding the festival source.
    ///
    /// This is used when the --file CLI flag is provided.
    pub fn load_with_festivals_path(festivals_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.festivals_path = festivals_path;
        Ok(config)
    }
}

/// Returns: ~/.local/share/cartel/festivales.csv (or platform equivalent)
fn default_festivals_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cartel")
        .join("festivales.csv")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/cartel/config.toml
/// - macOS: ~/Library/Application Support/cartel/config.toml
/// - Windows: %APPDATA%\cartel\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cartel")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Cartel Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CARTEL_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Festival source file
#
# One festival per line: name : venue : dd-mm-yyyy : days : style [: style ...]
#
# Can also be set via:
# - CLI: cartel --file /custom/festivales.csv show
# - Environment: CARTEL_FESTIVALS_PATH=/custom/festivales.csv
#
# Default: Platform-specific data directory
#
# From a source checkout, the bundled sample can be used directly:
#   cartel --file data/festivales.csv show
#festivals_path = "/path/to/festivales.csv"

# Log filter used when RUST_LOG is not set
#
# Can also be set via:
# - Environment: CARTEL_LOG_LEVEL=debug
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

    log::info!("Created config file {}", config_path.display());
    Ok(true)
}
