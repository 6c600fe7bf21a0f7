//! Test-only helpers for constructing countries, lands and config files.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::types::{Country, GovernmentType};

pub use crate::sample::{canada, china, east_asia, north_america, usa};

/// Create a deterministic country that differs only by name and GDP.
pub fn country_with_gdp(name: &str, gdp: i64) -> Country {
    Country::new(
        name,
        format!("{} capital", name),
        name.to_uppercase(),
        1_000,
        10.0,
        gdp,
        GovernmentType::Republic,
    )
}

/// Names of `countries`, in order.
pub fn names(countries: &[Country]) -> Vec<&str> {
    countries.iter().map(Country::name).collect()
}

/// Write `contents` to `landmass.toml` inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_config(contents: &str) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create tempdir")?;
    let path = dir.path().join("landmass.toml");
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok((dir, path))
}
