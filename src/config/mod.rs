// SPDX-License-Identifier: MPL-2.0
//! Application configuration stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[site]` - Image locator prefix, served directory, optional content file
//! - `[clipboard]` - Copy control timings and fallback command
//! - `[sync]` - Source locations for the asset sync
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SIMVLA_PAGE_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use simvla_page::config;
//!
//! let (mut config, _warning) = config::load();
//! config.site.base_path = "/SimVLA".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Where the page finds its images and content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Prefix prepended to every image locator, thumbnails and full size alike.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Served directory, relative to the project root unless absolute.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// External `paper.toml` replacing the embedded content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            public_dir: default_public_dir(),
            content_path: None,
        }
    }
}

/// Copy control settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClipboardConfig {
    /// Delay before "Copied" reverts to "Copy".
    #[serde(default = "default_copied_revert_ms")]
    pub copied_revert_ms: u64,

    /// Delay before "Copy failed" reverts to "Copy".
    #[serde(default = "default_failed_revert_ms")]
    pub failed_revert_ms: u64,

    /// Only use the system clipboard from a local (non-SSH) session.
    #[serde(default = "default_true")]
    pub require_local_session: bool,

    /// Legacy copy command (program and arguments) reading the payload on
    /// stdin. Unset selects the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_command: Option<Vec<String>>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            copied_revert_ms: DEFAULT_COPIED_REVERT_MS,
            failed_revert_ms: DEFAULT_FAILED_REVERT_MS,
            require_local_session: true,
            fallback_command: None,
        }
    }
}

impl ClipboardConfig {
    /// Revert delay after a successful copy, clamped to the supported range.
    #[must_use]
    pub fn copied_delay(&self) -> Duration {
        Duration::from_millis(self.copied_revert_ms.clamp(MIN_REVERT_MS, MAX_REVERT_MS))
    }

    /// Revert delay after a failed copy, clamped to the supported range.
    #[must_use]
    pub fn failed_delay(&self) -> Duration {
        Duration::from_millis(self.failed_revert_ms.clamp(MIN_REVERT_MS, MAX_REVERT_MS))
    }
}

/// Asset sync sources, relative to the project root unless absolute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncConfig {
    #[serde(default = "default_source_document")]
    pub source_document: PathBuf,

    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,

    /// When false, a missing source document is only a warning.
    #[serde(default = "default_true")]
    pub document_required: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source_document: default_source_document(),
            asset_dir: default_asset_dir(),
            document_required: true,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,

    #[serde(default)]
    pub sync: SyncConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PUBLIC_DIR)
}

fn default_copied_revert_ms() -> u64 {
    DEFAULT_COPIED_REVERT_MS
}

fn default_failed_revert_ms() -> u64 {
    DEFAULT_FAILED_REVERT_MS
}

fn default_source_document() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DOCUMENT)
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ASSET_DIR)
}

fn default_true() -> bool {
    true
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves a configured path against the project root.
#[must_use]
pub fn resolve_against(root: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        root.join(configured)
    }
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{} ignored: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.site.base_path, "");
        assert_eq!(config.site.public_dir, PathBuf::from("public"));
        assert_eq!(config.clipboard.copied_delay(), Duration::from_millis(1200));
        assert_eq!(config.clipboard.failed_delay(), Duration::from_millis(2000));
        assert!(config.sync.document_required);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.site.base_path = "/SimVLA".to_string();
        config.clipboard.fallback_command = Some(vec!["pbcopy".to_string()]);
        config.sync.document_required = false;

        save_to_path(&config, &path).expect("save");
        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[site]\nbase_path = \"/SimVLA\"\n").expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.site.base_path, "/SimVLA");
        assert_eq!(loaded.site.public_dir, PathBuf::from(DEFAULT_PUBLIC_DIR));
        assert_eq!(loaded.clipboard, ClipboardConfig::default());
        assert_eq!(loaded.sync, SyncConfig::default());
    }

    #[test]
    fn invalid_file_yields_defaults_and_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = \"sepia\"\n")
            .expect("write");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some_and(|w| w.contains("theme_mode")));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let dir = tempdir().expect("temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn revert_delays_are_clamped() {
        let clipboard = ClipboardConfig {
            copied_revert_ms: 0,
            failed_revert_ms: u64::MAX,
            ..ClipboardConfig::default()
        };
        assert_eq!(clipboard.copied_delay(), Duration::from_millis(MIN_REVERT_MS));
        assert_eq!(clipboard.failed_delay(), Duration::from_millis(MAX_REVERT_MS));
    }

    #[test]
    fn resolve_against_keeps_absolute_paths() {
        let root = Path::new("/repo");
        assert_eq!(
            resolve_against(root, Path::new("public")),
            PathBuf::from("/repo/public")
        );
        assert_eq!(
            resolve_against(root, Path::new("/var/www")),
            PathBuf::from("/var/www")
        );
    }
}
