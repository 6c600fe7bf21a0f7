//! GDP ranking helpers.

use std::cmp::Reverse;

use crate::core::types::Country;

/// Countries ordered by GDP, highest first.
///
/// The sort is stable: countries with equal GDP keep their input order.
pub fn sort_countries_by_gdp(countries: &[Country]) -> Vec<Country> {
    let mut sorted = countries.to_vec();
    sorted.sort_by_key(|country| Reverse(country.gdp()));
    sorted
}

/// The first `n` countries of [`sort_countries_by_gdp`].
///
/// Asking for more countries than exist returns the whole ranking.
pub fn top_countries_by_gdp(countries: &[Country], n: usize) -> Vec<Country> {
    let mut sorted = sort_countries_by_gdp(countries);
    sorted.truncate(n);
    sorted
}
