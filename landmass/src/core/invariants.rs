//! Well-formedness checks that construction does not enforce.

use crate::core::land::Land;
use crate::core::types::Country;

/// Check a single country:
/// - `name` and `code` are non-empty
/// - `area`, when present, is finite and > 0
///
/// Missing population/area/government are not violations here.
pub fn validate_country(country: &Country) -> Vec<String> {
    let mut errors = Vec::new();
    let label = if country.name().trim().is_empty() {
        "<unnamed>"
    } else {
        country.name()
    };

    if country.name().trim().is_empty() {
        errors.push("country name must not be empty".to_string());
    }
    if country.code().trim().is_empty() {
        errors.push(format!("{}: code must not be empty", label));
    }
    if let Some(area) = country
        .area()
        .filter(|area| !area.is_finite() || *area <= 0.0)
    {
        errors.push(format!("{}: area must be positive, got {}", label, area));
    }
    errors
}

/// Check every country in `land`, prefixing errors with the land name.
pub fn validate_land(land: &Land) -> Vec<String> {
    let mut errors = Vec::new();
    if land.name().trim().is_empty() {
        errors.push("land name must not be empty".to_string());
    }
    for country in land.countries() {
        errors.extend(
            validate_country(country)
                .into_iter()
                .map(|err| format!("{}/{}", land.name(), err)),
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CountryOptions, GovernmentType};
    use crate::test_support::{north_america, usa};

    #[test]
    fn sample_country_is_well_formed() {
        assert!(validate_country(&usa()).is_empty());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let country = Country::with_options("Ghost", "-", "GH", 0, CountryOptions::default());
        assert!(validate_country(&country).is_empty());
    }

    #[test]
    fn validate_country_reports_errors() {
        let country = Country::new("", "-", " ", 1, -3.0, 0, GovernmentType::Democracy);
        let errors = validate_country(&country);
        assert!(errors.iter().any(|err| err.contains("name must not be empty")));
        assert!(errors.iter().any(|err| err.contains("code must not be empty")));
        assert!(errors.iter().any(|err| err.contains("area must be positive")));
    }

    #[test]
    fn validate_land_prefixes_land_name() {
        let mut land = north_america();
        land.add_country(Country::new(
            "Flatland",
            "-",
            "FL",
            1,
            0.0,
            0,
            GovernmentType::Republic,
        ));
        let errors = validate_land(&land);
        assert_eq!(
            errors,
            vec!["North America/Flatland: area must be positive, got 0".to_string()]
        );
    }
}
