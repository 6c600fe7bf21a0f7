//! Country and landmass queries over the built-in sample data.
//!
//! Running `landmass` with no subcommand prints the demonstration report:
//! North America's population density, its countries ranked by GDP, and
//! East Asia's autocracies.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use landmass::core::filter::{choose_country, gdp_at_least, governed_by};
use landmass::core::invariants::validate_land;
use landmass::core::land::{DensityError, Land};
use landmass::core::ranking::top_countries_by_gdp;
use landmass::core::types::{Country, GovernmentType};
use landmass::exit_codes;
use landmass::io::config::{DEFAULT_CONFIG_FILE, ReportConfig, load_config, write_config};
use landmass::logging;
use landmass::report::{OutputFormat, build_report, render_chosen, render_json, render_ranking};
use landmass::sample::{NORTH_AMERICA, all_countries, find_land, sample_lands};

#[derive(Parser)]
#[command(
    name = "landmass",
    version,
    about = "Population density, GDP ranking and filtering for countries"
)]
struct Cli {
    /// Report configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the demonstration report (default).
    Demo {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the population density of one land.
    Density {
        #[arg(default_value = NORTH_AMERICA)]
        land: String,
    },
    /// List countries ranked by GDP, highest first.
    Top {
        /// Number of countries to list.
        #[arg(short, default_value_t = 3)]
        n: usize,
        /// Restrict to one land (default: every sample land).
        #[arg(long)]
        land: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List countries with the given form of government.
    Filter {
        #[arg(long)]
        government: GovernmentType,
        /// Only keep countries with at least this GDP.
        #[arg(long)]
        min_gdp: Option<i64>,
        /// Restrict to one land (default: every sample land).
        #[arg(long)]
        land: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Check the sample data for malformed countries.
    Validate,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let lands = sample_lands();
    match cli.command.unwrap_or(Command::Demo {
        format: OutputFormat::Text,
    }) {
        Command::Demo { format } => cmd_demo(&lands, &cli.config, format),
        Command::Density { land } => cmd_density(&lands, &land),
        Command::Top { n, land, format } => cmd_top(&lands, n, land.as_deref(), format),
        Command::Filter {
            government,
            min_gdp,
            land,
            format,
        } => cmd_filter(&lands, government, min_gdp, land.as_deref(), format),
        Command::Validate => cmd_validate(&lands),
        Command::Init { force } => cmd_init(&cli.config, force),
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<DensityError>().is_some() {
        exit_codes::DENSITY_UNDEFINED
    } else {
        exit_codes::INVALID
    }
}

fn cmd_demo(lands: &[Land], config_path: &Path, format: OutputFormat) -> Result<i32> {
    let cfg = load_config(config_path)?;
    debug!(?cfg, "config loaded");
    let report = build_report(lands, &cfg)?;
    match format {
        OutputFormat::Text => print!("{}", report.render(&cfg.separator)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(exit_codes::OK)
}

fn cmd_density(lands: &[Land], name: &str) -> Result<i32> {
    let land = select_land(lands, name)?;
    let density = land.calculate_population_density()?;
    println!(
        "Population of {}: {} people per square kilometer",
        land.name(),
        density
    );
    Ok(exit_codes::OK)
}

fn cmd_top(lands: &[Land], n: usize, land: Option<&str>, format: OutputFormat) -> Result<i32> {
    let countries = scoped_countries(lands, land)?;
    let ranking = top_countries_by_gdp(&countries, n);
    info!(requested = n, returned = ranking.len(), "ranked countries");
    match format {
        OutputFormat::Text => print!("{}", render_ranking(&ranking)),
        OutputFormat::Json => print!("{}", render_json(&ranking)?),
    }
    Ok(exit_codes::OK)
}

fn cmd_filter(
    lands: &[Land],
    government: GovernmentType,
    min_gdp: Option<i64>,
    land: Option<&str>,
    format: OutputFormat,
) -> Result<i32> {
    let countries = scoped_countries(lands, land)?;
    let is_governed = governed_by(government);
    let is_large = gdp_at_least(min_gdp.unwrap_or(i64::MIN));
    let chosen = choose_country(&countries, |country| is_governed(country) && is_large(country));
    info!(%government, ?min_gdp, matched = chosen.len(), "filtered countries");
    match format {
        OutputFormat::Text => print!("{}", render_chosen(government, &chosen)),
        OutputFormat::Json => print!("{}", render_json(&chosen)?),
    }
    Ok(exit_codes::OK)
}

fn cmd_validate(lands: &[Land]) -> Result<i32> {
    let errors: Vec<String> = lands.iter().flat_map(validate_land).collect();
    if !errors.is_empty() {
        bail!("invalid sample data:\n- {}", errors.join("\n- "));
    }
    println!("ok: {} lands", lands.len());
    Ok(exit_codes::OK)
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &ReportConfig::default())?;
    println!("wrote {}", path.display());
    Ok(exit_codes::OK)
}

fn select_land<'a>(lands: &'a [Land], name: &str) -> Result<&'a Land> {
    match find_land(lands, name) {
        Some(land) => Ok(land),
        None => bail!("unknown land '{}'", name),
    }
}

/// Countries of one named land, or of every land when `land` is `None`.
fn scoped_countries(lands: &[Land], land: Option<&str>) -> Result<Vec<Country>> {
    match land {
        Some(name) => Ok(select_land(lands, name)?.countries().to_vec()),
        None => Ok(all_countries(lands)),
    }
}
