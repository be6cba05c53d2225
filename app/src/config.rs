//! Shell configuration.
//!
//! The configuration is compiled into the bundle from `shell.toml`; every
//! field has a default so a partial file is valid.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

const EMBEDDED: &str = include_str!("../shell.toml");

/// Main configuration structure for the shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    /// Console log level ("error" .. "trace").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Branding shown in the sidebar, hero and footer.
    #[serde(default)]
    pub brand: BrandConfig,

    /// Outbound links.
    #[serde(default)]
    pub links: LinksConfig,

    /// Theme persistence settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Search box settings.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Branding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandConfig {
    #[serde(default = "default_brand_name")]
    pub name: String,

    /// Badge next to the sidebar title.
    #[serde(default = "default_version_label")]
    pub version_label: String,

    /// Hero heading suffix.
    #[serde(default = "default_hero_suffix")]
    pub hero_suffix: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,
}

/// Outbound links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinksConfig {
    /// Source repository, opened in a new browsing context.
    #[serde(default = "default_repository_url")]
    pub repository_url: String,
}

/// Theme persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Key under which the preference is stored.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Used when neither a stored value nor a scheme signal exists.
    #[serde(default = "default_true")]
    pub default_dark: bool,
}

/// Search box settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default = "default_quick_search_placeholder")]
    pub quick_search_placeholder: String,

    /// Wire the top bar quick search to the sidebar query.
    #[serde(default)]
    pub quick_search_filters: bool,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_brand_name() -> String {
    "SpaceDataStandards".to_string()
}

fn default_version_label() -> String {
    "v2.0".to_string()
}

fn default_hero_suffix() -> String {
    "2.0".to_string()
}

fn default_tagline() -> String {
    "Find standards, inspect IDL, generate code for FlatBuffers and JSON, \
     convert JSON \u{21c4} FlatBuffer in-browser, and sync with S3."
        .to_string()
}

fn default_repository_url() -> String {
    "https://github.com/digitalarsenal/beta.spacedatastandards.org".to_string()
}

fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_true() -> bool {
    true
}

fn default_placeholder() -> String {
    "Search standards, tags, or IDs".to_string()
}

fn default_quick_search_placeholder() -> String {
    "Quick search\u{2026}".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            brand: BrandConfig::default(),
            links: LinksConfig::default(),
            theme: ThemeConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
            version_label: default_version_label(),
            hero_suffix: default_hero_suffix(),
            tagline: default_tagline(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            repository_url: default_repository_url(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_dark: true,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            quick_search_placeholder: default_quick_search_placeholder(),
            quick_search_filters: false,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the bundle.
    ///
    /// Falls back to [`ShellConfig::default`] if the embedded file is rejected.
    pub fn embedded() -> Self {
        Self::from_toml_str(EMBEDDED).unwrap_or_else(|err| {
            log::warn!("ignoring embedded shell.toml: {err}");
            Self::default()
        })
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.theme.storage_key.trim().is_empty() {
            return Err(ShellError::config("theme.storage_key must not be empty"));
        }
        self.log_level()?;
        Ok(())
    }

    /// The configured console log level.
    pub fn log_level(&self) -> Result<log::Level> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| ShellError::config(format!("invalid log_level: {}", self.log_level)))
    }
}
