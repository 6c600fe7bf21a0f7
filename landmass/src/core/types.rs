//! Shared value types for countries and their classification.
//!
//! These types carry no behaviour beyond construction and field access. They
//! are plain values: a `Country` is cloned into every `Land` that holds it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form of government of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GovernmentType {
    Democracy,
    Republic,
    Autocracy,
}

impl GovernmentType {
    /// Every variant, in declaration order.
    pub const ALL: [GovernmentType; 3] = [
        GovernmentType::Democracy,
        GovernmentType::Republic,
        GovernmentType::Autocracy,
    ];

    pub fn iter() -> impl Iterator<Item = GovernmentType> {
        Self::ALL.into_iter()
    }

    /// Stable display label.
    pub fn as_str(self) -> &'static str {
        match self {
            GovernmentType::Democracy => "Democracy",
            GovernmentType::Republic => "Republic",
            GovernmentType::Autocracy => "Autocracy",
        }
    }

    /// Adjective used in report headers (`Autocratic countries:`).
    pub fn adjective(self) -> &'static str {
        match self {
            GovernmentType::Democracy => "Democratic",
            GovernmentType::Republic => "Republican",
            GovernmentType::Autocracy => "Autocratic",
        }
    }
}

impl fmt::Display for GovernmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown government type '{0}' (expected democracy, republic or autocracy)")]
pub struct ParseGovernmentTypeError(pub String);

impl FromStr for GovernmentType {
    type Err = ParseGovernmentTypeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        GovernmentType::iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseGovernmentTypeError(raw.to_string()))
    }
}

/// Optional country attributes. Anything left unset stays `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CountryOptions {
    pub population: Option<u64>,
    pub area: Option<f64>,
    pub government_type: Option<GovernmentType>,
}

/// A single country. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    name: String,
    capital: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    population: Option<u64>,
    /// Square kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    area: Option<f64>,
    gdp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    government_type: Option<GovernmentType>,
}

impl Country {
    /// Build a country with every attribute supplied.
    pub fn new(
        name: impl Into<String>,
        capital: impl Into<String>,
        code: impl Into<String>,
        population: u64,
        area: f64,
        gdp: i64,
        government_type: GovernmentType,
    ) -> Self {
        Self::with_options(
            name,
            capital,
            code,
            gdp,
            CountryOptions {
                population: Some(population),
                area: Some(area),
                government_type: Some(government_type),
            },
        )
    }

    /// Build a country whose population, area and government may be unknown.
    pub fn with_options(
        name: impl Into<String>,
        capital: impl Into<String>,
        code: impl Into<String>,
        gdp: i64,
        options: CountryOptions,
    ) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
            code: code.into(),
            population: options.population,
            area: options.area,
            gdp,
            government_type: options.government_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capital(&self) -> &str {
        &self.capital
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn population(&self) -> Option<u64> {
        self.population
    }

    pub fn area(&self) -> Option<f64> {
        self.area
    }

    pub fn gdp(&self) -> i64 {
        self.gdp
    }

    pub fn government_type(&self) -> Option<GovernmentType> {
        self.government_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn government_types_iterate_in_declaration_order() {
        let all: Vec<GovernmentType> = GovernmentType::iter().collect();
        assert_eq!(
            all,
            vec![
                GovernmentType::Democracy,
                GovernmentType::Republic,
                GovernmentType::Autocracy,
            ]
        );
    }

    #[test]
    fn government_type_parses_case_insensitively() {
        assert_eq!(
            "AUTOCRACY".parse::<GovernmentType>(),
            Ok(GovernmentType::Autocracy)
        );
        assert_eq!(
            " republic ".parse::<GovernmentType>(),
            Ok(GovernmentType::Republic)
        );
        assert!("monarchy".parse::<GovernmentType>().is_err());
    }

    #[test]
    fn government_type_display_is_stable() {
        for kind in GovernmentType::iter() {
            assert_eq!(kind.to_string().parse::<GovernmentType>(), Ok(kind));
        }
        assert_eq!(GovernmentType::Democracy.to_string(), "Democracy");
    }

    #[test]
    fn government_type_serializes_lowercase() {
        let json = serde_json::to_string(&GovernmentType::Autocracy).expect("serialize");
        assert_eq!(json, "\"autocracy\"");
    }

    #[test]
    fn with_options_leaves_unset_fields_absent() {
        let country =
            Country::with_options("Atlantis", "Poseidonis", "AT", 42, CountryOptions::default());
        assert_eq!(country.population(), None);
        assert_eq!(country.area(), None);
        assert_eq!(country.government_type(), None);
        assert_eq!(country.gdp(), 42);
    }

    #[test]
    fn new_populates_every_field() {
        let country = Country::new(
            "Canada",
            "Ottawa",
            "CA",
            37_742_154,
            9_984_670.0,
            1_785_388,
            GovernmentType::Democracy,
        );
        assert_eq!(country.name(), "Canada");
        assert_eq!(country.capital(), "Ottawa");
        assert_eq!(country.code(), "CA");
        assert_eq!(country.population(), Some(37_742_154));
        assert_eq!(country.area(), Some(9_984_670.0));
        assert_eq!(country.government_type(), Some(GovernmentType::Democracy));
    }

    #[test]
    fn identical_countries_compare_equal_but_are_distinct_values() {
        let a = Country::new("X", "Y", "XY", 1, 1.0, 1, GovernmentType::Republic);
        let b = a.clone();
        assert_eq!(a, b);
    }
}
