//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Configuration is
//! layered: stock defaults are overridden by the user's `config.toml` in the
//! config directory. Content (text, images, lists) does not live here; this is
//! presentation and wiring that the operator rarely touches.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "ATOKETO | Premium Fresh Poke"
//! lang = "ko"
//! description = "아토키토 가맹 안내"
//!
//! [colors]
//! main = "#008037"          # Brand green: buttons, pins, highlights
//! dark = "#0b3d2e"          # Headings and body text
//! light = "#e6f4ea"         # Soft tint behind badges
//! cream = "#faf8f3"         # Page background
//!
//! [map]
//! min_lat = 34.0            # Bounding box of the store map image
//! max_lat = 38.0
//! min_lng = 126.0
//! max_lng = 129.5
//!
//! [contact]
//! email = "franchise@example.com"
//! quick_subject = "아토키토 간편 상담 신청"
//! inquiry_subject = "아토키토 가맹 문의"
//! inquiry_closing = "아토키토 가맹 문의드립니다."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::geo::MapBounds;
use serde::{Deserialize, Serialize};
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

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document metadata.
    pub site: SiteMeta,
    /// Brand palette, emitted as CSS custom properties.
    pub colors: BrandColors,
    /// Geographic box of the store map image.
    pub map: MapBounds,
    /// Destination and subjects for the contact forms.
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.min_lat >= self.map.max_lat {
            return Err(ConfigError::Validation(
                "map.min_lat must be less than map.max_lat".into(),
            ));
        }
        if self.map.min_lng >= self.map.max_lng {
            return Err(ConfigError::Validation(
                "map.min_lng must be less than map.max_lng".into(),
            ));
        }
        if !self.contact.email.contains('@') {
            return Err(ConfigError::Validation(
                "contact.email must be an email address".into(),
            ));
        }
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// `<title>` of the page.
    pub title: String,
    /// `lang` attribute of the document.
    pub lang: String,
    /// `<meta name="description">` content.
    pub description: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "ATOKETO | Premium Fresh Poke".to_string(),
            lang: "ko".to_string(),
            description: "아토키토 가맹 안내".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandColors {
    /// Primary brand color (buttons, pins, highlights).
    pub main: String,
    /// Headings and body text.
    pub dark: String,
    /// Soft tint behind badges and avatars.
    pub light: String,
    /// Page background.
    pub cream: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            main: "#008037".to_string(),
            dark: "#0b3d2e".to_string(),
            light: "#e6f4ea".to_string(),
            cream: "#faf8f3".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Fixed destination of every contact message.
    pub email: String,
    /// Subject of quick-consult messages.
    pub quick_subject: String,
    /// Subject of franchise inquiry messages.
    pub inquiry_subject: String,
    /// Last line of the inquiry body.
    pub inquiry_closing: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "franchise@example.com".to_string(),
            quick_subject: "아토키토 간편 상담 신청".to_string(),
            inquiry_subject: "아토키토 가맹 문의".to_string(),
            inquiry_closing: "아토키토 가맹 문의드립니다.".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config does not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, over stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# franchise-site configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Document metadata
# ---------------------------------------------------------------------------
[site]
title = "ATOKETO | Premium Fresh Poke"
lang = "ko"
description = "아토키토 가맹 안내"

# ---------------------------------------------------------------------------
# Brand palette (emitted as CSS custom properties)
# ---------------------------------------------------------------------------
[colors]
main = "#008037"    # Buttons, map pins, highlighted cost cards
dark = "#0b3d2e"    # Headings and body text
light = "#e6f4ea"   # Soft tint behind badges
cream = "#faf8f3"   # Page background

# ---------------------------------------------------------------------------
# Store map bounding box, in degrees
# ---------------------------------------------------------------------------
# Pins are placed linearly inside this box and kept 5% away from the edges.
[map]
min_lat = 34.0
max_lat = 38.0
min_lng = 126.0
max_lng = 129.5

# ---------------------------------------------------------------------------
# Contact forms
# ---------------------------------------------------------------------------
[contact]
email = "franchise@example.com"
quick_subject = "아토키토 간편 상담 신청"
inquiry_subject = "아토키토 가맹 문의"
inquiry_closing = "아토키토 가맹 문의드립니다."
"##
}

/// Generate CSS custom properties from the brand palette.
pub fn generate_color_css(colors: &BrandColors) -> String {
    format!(
        r#":root {{
    --brand-main: {main};
    --brand-dark: {dark};
    --brand-light: {light};
    --brand-cream: {cream};
}}"#,
        main = colors.main,
        dark = colors.dark,
        light = colors.light,
        cream = colors.cream,
    )
}
