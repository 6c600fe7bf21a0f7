//! Built-in sample countries and landmasses used by the CLI.

use crate::core::land::Land;
use crate::core::types::{Country, GovernmentType};

pub const NORTH_AMERICA: &str = "North America";
pub const EAST_ASIA: &str = "East Asia";

pub fn usa() -> Country {
    Country::new(
        "USA",
        "Washington",
        "US",
        331_002_651,
        9_372_610.0,
        21_433_225,
        GovernmentType::Republic,
    )
}

pub fn canada() -> Country {
    Country::new(
        "Canada",
        "Ottawa",
        "CA",
        37_742_154,
        9_984_670.0,
        1_785_388,
        GovernmentType::Democracy,
    )
}

pub fn china() -> Country {
    Country::new(
        "China",
        "Beijing",
        "CN",
        1_439_323_776,
        9_596_961.0,
        1_434_293,
        GovernmentType::Autocracy,
    )
}

pub fn north_america() -> Land {
    let mut land = Land::new(NORTH_AMERICA);
    land.add_country(usa());
    land.add_country(canada());
    land
}

pub fn east_asia() -> Land {
    let mut land = Land::new(EAST_ASIA);
    land.add_country(china());
    land
}

/// Every sample land, in a fixed order.
pub fn sample_lands() -> Vec<Land> {
    vec![north_america(), east_asia()]
}

/// Case-insensitive lookup of a land by name.
pub fn find_land<'a>(lands: &'a [Land], name: &str) -> Option<&'a Land> {
    let name = name.trim();
    lands
        .iter()
        .find(|land| land.name().eq_ignore_ascii_case(name))
}

/// All countries of `lands`, flattened in land order.
pub fn all_countries(lands: &[Land]) -> Vec<Country> {
    lands
        .iter()
        .flat_map(|land| land.countries().iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invariants::validate_land;

    #[test]
    fn sample_lands_are_well_formed() {
        for land in sample_lands() {
            assert!(validate_land(&land).is_empty(), "{}", land.name());
        }
    }

    #[test]
    fn find_land_ignores_case() {
        let lands = sample_lands();
        let found = find_land(&lands, "east asia").expect("east asia");
        assert_eq!(found.name(), EAST_ASIA);
        assert!(find_land(&lands, "Atlantis").is_none());
    }

    #[test]
    fn all_countries_flattens_in_land_order() {
        let names: Vec<String> = all_countries(&sample_lands())
            .iter()
            .map(|country| country.name().to_string())
            .collect();
        assert_eq!(names, vec!["USA", "Canada", "China"]);
    }
}
