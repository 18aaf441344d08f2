//! Configuration file loading with precedence handling.

use crate::model::layout::{
    DEFAULT_COMPACT_BREAKPOINT, DEFAULT_DESKTOP_BREAKPOINT, DEFAULT_STICKY_OFFSET_DESKTOP,
    DEFAULT_STICKY_OFFSET_MOBILE, DEFAULT_STICKY_OFFSET_TABLET, DEFAULT_TABLET_BREAKPOINT,
};
use crate::model::{LayoutConstants, Px, Timings};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "HEROSEARCH_CONFIG";

/// Environment variable overriding the debounce delay in milliseconds.
pub const DEBOUNCE_ENV: &str = "HEROSEARCH_DEBOUNCE_MS";

/// Environment variable overriding the banner height in pixels.
pub const BANNER_ENV: &str = "HEROSEARCH_BANNER_HEIGHT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a regular file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/herosearch/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Quiet period before a query is published, in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Delay between expanding the compact search and focusing it, in milliseconds.
    #[serde(default)]
    pub focus_delay_ms: Option<u64>,

    /// Widths below this are compact.
    #[serde(default)]
    pub compact_breakpoint: Option<Px>,

    /// Widths above this use the medium sticky offset.
    #[serde(default)]
    pub tablet_breakpoint: Option<Px>,

    /// Widths above this are desktop.
    #[serde(default)]
    pub desktop_breakpoint: Option<Px>,

    /// Sticky offset for narrow viewports.
    #[serde(default)]
    pub sticky_offset_mobile: Option<Px>,

    /// Sticky offset for medium viewports.
    #[serde(default)]
    pub sticky_offset_tablet: Option<Px>,

    /// Sticky offset for wide viewports.
    #[serde(default)]
    pub sticky_offset_desktop: Option<Px>,

    /// Height of the external banner above the page.
    #[serde(default)]
    pub banner_height: Option<Px>,

    /// Pixels per terminal column.
    #[serde(default)]
    pub px_per_column: Option<Px>,

    /// Pixels per terminal row.
    #[serde(default)]
    pub px_per_row: Option<Px>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Debounce delay in milliseconds.
    pub debounce_ms: u64,
    /// Focus hand-off delay in milliseconds.
    pub focus_delay_ms: u64,
    /// Compact breakpoint.
    pub compact_breakpoint: Px,
    /// Tablet breakpoint.
    pub tablet_breakpoint: Px,
    /// Desktop breakpoint.
    pub desktop_breakpoint: Px,
    /// Narrow sticky offset.
    pub sticky_offset_mobile: Px,
    /// Medium sticky offset.
    pub sticky_offset_tablet: Px,
    /// Wide sticky offset.
    pub sticky_offset_desktop: Px,
    /// External banner height.
    pub banner_height: Px,
    /// Pixels per terminal column.
    pub px_per_column: Px,
    /// Pixels per terminal row.
    pub px_per_row: Px,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let timings = Timings::default();
        Self {
            debounce_ms: millis(timings.debounce),
            focus_delay_ms: millis(timings.focus_hand_off),
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
            tablet_breakpoint: DEFAULT_TABLET_BREAKPOINT,
            desktop_breakpoint: DEFAULT_DESKTOP_BREAKPOINT,
            sticky_offset_mobile: DEFAULT_STICKY_OFFSET_MOBILE,
            sticky_offset_tablet: DEFAULT_STICKY_OFFSET_TABLET,
            sticky_offset_desktop: DEFAULT_STICKY_OFFSET_DESKTOP,
            banner_height: 0,
            px_per_column: 10,
            px_per_row: 20,
            log_file_path: default_log_path(),
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl ResolvedConfig {
    /// Timer delays for the page.
    pub fn timings(&self) -> Timings {
        Timings {
            debounce: Duration::from_millis(self.debounce_ms),
            focus_hand_off: Duration::from_millis(self.focus_delay_ms),
        }
    }

    /// Breakpoints and sticky offsets for the page.
    pub fn layout(&self) -> LayoutConstants {
        LayoutConstants {
            compact_breakpoint: self.compact_breakpoint,
            tablet_breakpoint: self.tablet_breakpoint,
            desktop_breakpoint: self.desktop_breakpoint,
            sticky_offset_mobile: self.sticky_offset_mobile,
            sticky_offset_tablet: self.sticky_offset_tablet,
            sticky_offset_desktop: self.sticky_offset_desktop,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/herosearch/herosearch.log` on Linux,
/// or the platform equivalent elsewhere.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("herosearch").join("herosearch.log"),
        None => PathBuf::from("herosearch.log"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/herosearch/config.toml` on Linux.
/// Returns `None` if no config directory is known for the platform.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("herosearch").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `HEROSEARCH_CONFIG` environment variable
/// 3. Default path `~/.config/herosearch/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `HEROSEARCH_CONFIG` is not valid UTF-8.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        focus_delay_ms: config.focus_delay_ms.unwrap_or(defaults.focus_delay_ms),
        compact_breakpoint: config
            .compact_breakpoint
            .unwrap_or(defaults.compact_breakpoint),
        tablet_breakpoint: config
            .tablet_breakpoint
            .unwrap_or(defaults.tablet_breakpoint),
        desktop_breakpoint: config
            .desktop_breakpoint
            .unwrap_or(defaults.desktop_breakpoint),
        sticky_offset_mobile: config
            .sticky_offset_mobile
            .unwrap_or(defaults.sticky_offset_mobile),
        sticky_offset_tablet: config
            .sticky_offset_tablet
            .unwrap_or(defaults.sticky_offset_tablet),
        sticky_offset_desktop: config
            .sticky_offset_desktop
            .unwrap_or(defaults.sticky_offset_desktop),
        banner_height: config.banner_height.unwrap_or(defaults.banner_height),
        px_per_column: config.px_per_column.unwrap_or(defaults.px_per_column),
        px_per_row: config.px_per_row.unwrap_or(defaults.px_per_row),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `HEROSEARCH_DEBOUNCE_MS`: Override debounce delay
/// - `HEROSEARCH_BANNER_HEIGHT`: Override banner height
///
/// Values that do not parse as integers are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(DEBOUNCE_ENV) {
        match raw.trim().parse() {
            Ok(ms) => config.debounce_ms = ms,
            Err(_) => warn!(var = DEBOUNCE_ENV, value = %raw, "Ignoring non-numeric override"),
        }
    }

    if let Ok(raw) = std::env::var(BANNER_ENV) {
        match raw.trim().parse() {
            Ok(px) => config.banner_height = px,
            Err(_) => warn!(var = BANNER_ENV, value = %raw, "Ignoring non-numeric override"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    debounce_override: Option<u64>,
    banner_override: Option<Px>,
) -> ResolvedConfig {
    if let Some(ms) = debounce_override {
        config.debounce_ms = ms;
    }

    if let Some(px) = banner_override {
        config.banner_height = px;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
