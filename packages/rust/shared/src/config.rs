//! Application configuration for ReadScout.
//!
//! User config lives at `~/.readscout/readscout.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReadScoutError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "readscout.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".readscout";

// ---------------------------------------------------------------------------
// Config structs (matching readscout.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Search pipeline tuning.
    #[serde(default)]
    pub search: SearchConfig,

    /// URL validation tuning.
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// `[search]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of raw search results fed into the filter.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> usize {
    10
}

/// `[validation]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Per-request timeout in seconds for HEAD/GET probes.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of body bytes to sniff for content checks.
    #[serde(default = "default_max_sniff_bytes")]
    pub max_sniff_bytes: usize,

    /// Minimum visible-text length for a page to count as real content.
    #[serde(default = "default_min_visible_chars")]
    pub min_visible_chars: usize,

    /// Hosts allowed to skip content sniffing (client-side-rendered SPAs
    /// whose initial HTML is nearly empty).
    #[serde(default = "default_trusted_domains")]
    pub trusted_domains: Vec<String>,

    /// Phrases indicating a success-status "not found" page.
    #[serde(default = "default_soft_404_phrases")]
    pub soft_404_phrases: Vec<String>,

    /// Phrases indicating a paywall or login wall.
    #[serde(default = "default_paywall_phrases")]
    pub paywall_phrases: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_sniff_bytes: default_max_sniff_bytes(),
            min_visible_chars: default_min_visible_chars(),
            trusted_domains: default_trusted_domains(),
            soft_404_phrases: default_soft_404_phrases(),
            paywall_phrases: default_paywall_phrases(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_sniff_bytes() -> usize {
    100 * 1024
}

fn default_min_visible_chars() -> usize {
    200
}

fn default_trusted_domains() -> Vec<String> {
    [
        "react.dev",
        "vuejs.org",
        "angular.io",
        "angular.dev",
        "developer.android.com",
        "learn.microsoft.com",
        "docs.oracle.com",
        "kotlinlang.org",
        "flutter.dev",
        "developer.mozilla.org",
        "docs.python.org",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_soft_404_phrases() -> Vec<String> {
    [
        "page not found",
        "the page you requested",
        "this page doesn't exist",
        "this page does not exist",
        "404 error",
        "không tìm thấy trang",
        "trang không tồn tại",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_paywall_phrases() -> Vec<String> {
    [
        "subscribe to continue",
        "subscription required",
        "sign in to read",
        "sign in to continue reading",
        "premium content",
        "become a member to read",
        "đăng ký để đọc tiếp",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.readscout/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ReadScoutError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.readscout/readscout.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ReadScoutError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        ReadScoutError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ReadScoutError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ReadScoutError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ReadScoutError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
