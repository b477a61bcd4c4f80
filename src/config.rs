//! Runtime configuration.
//!
//! Loads an optional `config.toml` found next to the roster file. Everything
//! has a stock default — no config file is required — and files are sparse:
//! set only the keys you want to override. A mistyped key is an error, not
//! a silently ignored setting.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [limits]
//! # max_entries = 500      # cap on parsed entries; omit for unlimited
//!
//! [sorting]
//! numeric_years = false    # compare years as integers where they parse
//!
//! [table]
//! width_px = 600           # per-entry table width in pixels
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Roster configuration loaded from `config.toml`.
///
/// Every field defaults to the stock value, so a config file only has to
/// name what it changes. Unknown keys fail deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Parser capacity settings.
    pub limits: LimitsConfig,
    /// Sort behavior settings.
    pub sorting: SortingConfig,
    /// Entry table rendering settings.
    pub table: TableConfig,
}

impl RosterConfig {
    /// Range-check the loaded values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_entries == Some(0) {
            return Err(ConfigError::Validation(
                "limits.max_entries must be greater than zero".into(),
            ));
        }
        if self.table.width_px == 0 {
            return Err(ConfigError::Validation(
                "table.width_px must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Parser capacity settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum number of entries to accept. Parsing fails explicitly when
    /// the roster exceeds the cap; absent means unlimited (the default).
    pub max_entries: Option<usize>,
}

/// Sort behavior settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortingConfig {
    /// Compare year fields numerically where they parse as integers.
    /// Off by default: the raw string comparison is the published listing's
    /// long-standing behavior.
    pub numeric_years: bool,
}

/// Entry table rendering settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Width of each entry table in pixels.
    pub width_px: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { width_px: 600 }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from `config.toml` in the given directory.
///
/// A missing file yields the stock defaults; a present file is deserialized
/// with defaults filling unset keys, then validated.
pub fn load_config(dir: &Path) -> Result<RosterConfig, ConfigError> {
    let config_path = dir.join("config.toml");
    let config: RosterConfig = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        RosterConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Thesis Roster Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the same directory as the roster file.
# Keys not listed here are rejected.

# ---------------------------------------------------------------------------
# Parser limits
# ---------------------------------------------------------------------------
[limits]
# Maximum number of entries to accept before failing.
# Omit or comment out for unlimited (the default).
# max_entries = 500

# ---------------------------------------------------------------------------
# Sorting
# ---------------------------------------------------------------------------
[sorting]
# Compare year fields as integers when both sides parse as numbers.
# The default keeps the raw string comparison the published listing has
# always used; enable this only for rosters with mixed-width years.
numeric_years = false

# ---------------------------------------------------------------------------
# Entry tables
# ---------------------------------------------------------------------------
[table]
# Width of each entry table in pixels.
width_px = 600
"##
}
