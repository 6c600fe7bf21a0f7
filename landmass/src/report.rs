//! Report assembly for `landmass demo`, `top` and `filter`.

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::core::filter::{choose_country, governed_by};
use crate::core::land::Land;
use crate::core::ranking::top_countries_by_gdp;
use crate::core::types::{Country, GovernmentType};
use crate::io::config::ReportConfig;
use crate::sample::find_land;

/// Output encoding for country listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Computed sections of the demonstration report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub density_land: String,
    /// People per square kilometre.
    pub density: f64,
    pub ranking: Vec<Country>,
    pub filter_government: GovernmentType,
    pub chosen: Vec<Country>,
}

impl Report {
    /// Render the report as the lines printed to stdout.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Population of {}: {} people per square kilometer\n",
            self.density_land, self.density
        ));
        out.push_str(separator);
        out.push('\n');
        out.push_str(&render_ranking(&self.ranking));
        out.push_str(separator);
        out.push('\n');
        out.push_str(&render_chosen(self.filter_government, &self.chosen));
        out
    }
}

/// Compute every report section from `lands` as directed by `cfg`.
pub fn build_report(lands: &[Land], cfg: &ReportConfig) -> Result<Report> {
    let density_land = lookup(lands, &cfg.density_land)?;
    let density = density_land
        .calculate_population_density()
        .with_context(|| format!("population density of {}", density_land.name()))?;
    debug!(land = density_land.name(), density, "density computed");

    let ranking_land = lookup(lands, &cfg.ranking_land)?;
    let ranking = top_countries_by_gdp(ranking_land.countries(), cfg.top_n);
    debug!(
        land = ranking_land.name(),
        requested = cfg.top_n,
        returned = ranking.len(),
        "ranking computed"
    );

    let filter_land = lookup(lands, &cfg.filter_land)?;
    let chosen = choose_country(filter_land.countries(), governed_by(cfg.filter_government));
    debug!(
        land = filter_land.name(),
        government = %cfg.filter_government,
        matched = chosen.len(),
        "filter applied"
    );

    Ok(Report {
        density_land: density_land.name().to_string(),
        density,
        ranking,
        filter_government: cfg.filter_government,
        chosen,
    })
}

/// `Top N countries by GDP:` followed by one `name: gdp` line per country.
///
/// `N` is the number of countries listed, not the number requested.
pub fn render_ranking(ranking: &[Country]) -> String {
    let mut out = format!("Top {} countries by GDP:\n", ranking.len());
    for country in ranking {
        out.push_str(&format!("{}: {}\n", country.name(), country.gdp()));
    }
    out
}

/// `<Adjective> countries:` followed by one name per line.
pub fn render_chosen(kind: GovernmentType, chosen: &[Country]) -> String {
    let mut out = format!("{} countries:\n", kind.adjective());
    for country in chosen {
        out.push_str(country.name());
        out.push('\n');
    }
    out
}

/// Pretty JSON array of `countries` with trailing newline.
pub fn render_json(countries: &[Country]) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(countries).context("serialize countries")?;
    payload.push('\n');
    Ok(payload)
}

fn lookup<'a>(lands: &'a [Land], name: &str) -> Result<&'a Land> {
    find_land(lands, name).ok_or_else(|| {
        let known: Vec<&str> = lands.iter().map(Land::name).collect();
        anyhow!("unknown land '{}' (known: {})", name, known.join(", "))
    })
}
