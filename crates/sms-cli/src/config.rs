//! CLI configuration.
//!
//! Settings are read from TOML. Every section is optional and falls back to
//! the built-in defaults (160/7 segment limits, 0.05 AUD per segment, the
//! built-in merge-tag catalog).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use sms_catalog::{TagCatalog, load_active_catalog};
use sms_core::Pricing;
use sms_model::SegmentPolicy;
use tracing::info;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "SMS_NOTIFY_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub segments: SegmentPolicy,
    pub pricing: Pricing,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// CSV catalog file. Relative paths resolve against the config file.
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Load from `explicit`, then `SMS_NOTIFY_CONFIG`, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        });
        match path {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and check a configuration file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        let mut settings = Self::from_toml(&contents)
            .with_context(|| format!("parse config: {}", path.display()))?;
        if let Some(catalog) = &settings.catalog.path
            && catalog.is_relative()
            && let Some(parent) = path.parent()
        {
            settings.catalog.path = Some(parent.join(catalog));
        }
        info!(path = %path.display(), "configuration loaded");
        Ok(settings)
    }

    /// Parse and check settings from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings: Self = toml::from_str(contents)?;
        settings.check()?;
        Ok(settings)
    }

    fn check(&self) -> Result<()> {
        if !self.segments.is_valid() {
            bail!(
                "invalid segment limits: single_limit {} must be positive and larger than concat_overhead {}",
                self.segments.single_limit,
                self.segments.concat_overhead
            );
        }
        if !self.pricing.is_valid() {
            bail!(
                "invalid pricing: cost_per_segment {} must be a non-negative number",
                self.pricing.cost_per_segment
            );
        }
        Ok(())
    }

    /// The merge-tag catalog these settings select.
    pub fn catalog(&self) -> Result<TagCatalog> {
        load_active_catalog(self.catalog.path.as_deref()).context("load merge-tag catalog")
    }
}
