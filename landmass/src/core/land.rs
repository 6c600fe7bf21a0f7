//! Landmass aggregate and its population density metric.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Country;

/// Why a population density could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DensityError {
    #[error("country '{country}' has no population")]
    MissingPopulation { country: String },

    #[error("country '{country}' has no area")]
    MissingArea { country: String },

    /// Empty land, or every contained area sums to zero.
    #[error("land '{land}' has zero total area")]
    ZeroArea { land: String },
}

/// A named, append-only group of countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Land {
    name: String,
    countries: Vec<Country>,
}

impl Land {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            countries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Countries in insertion order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Append `country`. Duplicates are kept.
    pub fn add_country(&mut self, country: Country) {
        self.countries.push(country);
    }

    /// Total population divided by total area, in people per square kilometre.
    ///
    /// Every country must carry both a population and an area; the first one
    /// missing either (in insertion order) is reported.
    pub fn calculate_population_density(&self) -> Result<f64, DensityError> {
        let mut total_population: u128 = 0;
        let mut total_area = 0.0_f64;

        for country in &self.countries {
            let population = country
                .population()
                .ok_or_else(|| DensityError::MissingPopulation {
                    country: country.name().to_string(),
                })?;
            let area = country.area().ok_or_else(|| DensityError::MissingArea {
                country: country.name().to_string(),
            })?;
            total_population += u128::from(population);
            total_area += area;
        }

        if total_area == 0.0 {
            return Err(DensityError::ZeroArea {
                land: self.name.clone(),
            });
        }

        Ok(total_population as f64 / total_area)
    }
}
