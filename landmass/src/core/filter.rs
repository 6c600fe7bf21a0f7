//! Predicate-based country selection.

use crate::core::types::{Country, GovernmentType};

/// Countries for which `predicate` holds, in their original order.
pub fn choose_country<F>(countries: &[Country], predicate: F) -> Vec<Country>
where
    F: Fn(&Country) -> bool,
{
    countries
        .iter()
        .filter(|country| predicate(country))
        .cloned()
        .collect()
}

/// Matches countries with the given form of government.
pub fn governed_by(kind: GovernmentType) -> impl Fn(&Country) -> bool {
    move |country| country.government_type() == Some(kind)
}

/// Matches countries whose GDP is at least `threshold`.
pub fn gdp_at_least(threshold: i64) -> impl Fn(&Country) -> bool {
    move |country| country.gdp() >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CountryOptions;
    use crate::test_support::{canada, china, country_with_gdp, names, usa};

    #[test]
    fn choose_autocracies() {
        let chosen = choose_country(&[china()], |country| {
            country.government_type() == Some(GovernmentType::Autocracy)
        });
        assert_eq!(names(&chosen), vec!["China"]);
    }

    #[test]
    fn choose_from_empty_is_empty() {
        let chosen = choose_country(&[], governed_by(GovernmentType::Autocracy));
        assert!(chosen.is_empty());
    }

    #[test]
    fn choose_preserves_order() {
        let countries = vec![usa(), china(), canada()];
        let chosen = choose_country(&countries, |country| country.name() != "China");
        assert_eq!(names(&chosen), vec!["USA", "Canada"]);
    }

    #[test]
    fn choose_accepts_function_pointers() {
        fn has_two_letter_code(country: &Country) -> bool {
            country.code().len() == 2
        }
        let countries = vec![usa(), canada()];
        assert_eq!(choose_country(&countries, has_two_letter_code).len(), 2);
    }

    #[test]
    fn governed_by_skips_unknown_government() {
        let unknown = Country::with_options("Nowhere", "-", "NW", 0, CountryOptions::default());
        let chosen = choose_country(&[unknown, usa()], governed_by(GovernmentType::Republic));
        assert_eq!(names(&chosen), vec!["USA"]);
    }

    #[test]
    fn gdp_at_least_is_inclusive() {
        let countries = vec![
            country_with_gdp("a", 9),
            country_with_gdp("b", 10),
            country_with_gdp("c", 11),
        ];
        let chosen = choose_country(&countries, gdp_at_least(10));
        assert_eq!(names(&chosen), vec!["b", "c"]);
        assert!(chosen.len() <= countries.len());
    }
}
