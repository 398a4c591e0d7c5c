use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::transport::TransportMode;

pub const DEFAULT_BRAND: &str = "Choix";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand: String,
    pub transport_modes: Vec<TransportMode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSiteConfig {
    brand: Option<String>,
    transport_modes: Option<Vec<TransportMode>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            transport_modes: TransportMode::ALL.to_vec(),
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        Self::from_toml(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let parsed: RawSiteConfig = toml::from_str(raw).context("failed to parse TOML")?;
        let cfg = Self::from_raw(parsed);
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_raw(raw: RawSiteConfig) -> Self {
        let defaults = Self::default();
        Self {
            brand: raw.brand.unwrap_or(defaults.brand),
            transport_modes: raw.transport_modes.unwrap_or(defaults.transport_modes),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.brand.trim().is_empty() {
            bail!("brand must not be empty");
        }
        if self.transport_modes.is_empty() {
            bail!("transport_modes must list at least one mode");
        }

        let mut seen = HashSet::new();
        for mode in &self.transport_modes {
            if !seen.insert(mode) {
                bail!("transport_modes lists '{}' more than once", mode.key());
            }
        }

        Ok(())
    }
}
