//! Report configuration stored in `landmass.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::GovernmentType;
use crate::sample::{EAST_ASIA, NORTH_AMERICA};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "landmass.toml";

/// Report configuration (TOML).
///
/// Missing fields default to the values that reproduce the sample report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Land whose population density heads the report.
    pub density_land: String,

    /// Land whose countries are ranked by GDP.
    pub ranking_land: String,

    /// How many countries to list in the ranking.
    pub top_n: usize,

    /// Land whose countries are filtered by government.
    pub filter_land: String,

    pub filter_government: GovernmentType,

    /// Line printed between report sections.
    pub separator: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            density_land: NORTH_AMERICA.to_string(),
            ranking_land: NORTH_AMERICA.to_string(),
            top_n: 3,
            filter_land: EAST_ASIA.to_string(),
            filter_government: GovernmentType::Autocracy,
            separator: "============".to_string(),
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("density_land", &self.density_land),
            ("ranking_land", &self.ranking_land),
            ("filter_land", &self.filter_land),
        ] {
            if value.trim().is_empty() {
                return Err(anyhow!("{} must not be empty", field));
            }
        }
        if self.separator.is_empty() {
            return Err(anyhow!("separator must not be empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ReportConfig::default()`.
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config missing, using defaults");
        let cfg = ReportConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReportConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ReportConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
