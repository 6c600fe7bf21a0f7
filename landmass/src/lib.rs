//! Countries, landmasses and the small set of queries run over them.
//!
//! - **[`core`]**: Pure, deterministic logic (country and land values,
//!   population density, GDP ranking, predicate filtering). No I/O.
//! - **[`io`]**: Side-effecting helpers (configuration file handling).
//!
//! [`sample`] holds the built-in data set and [`report`] combines core
//! queries into the output printed by the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
pub mod sample;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::filter::choose_country;
pub use crate::core::land::{DensityError, Land};
pub use crate::core::ranking::{sort_countries_by_gdp, top_countries_by_gdp};
pub use crate::core::types::{Country, CountryOptions, GovernmentType};
