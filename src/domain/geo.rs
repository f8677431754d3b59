//! Geographic lookups
//!
//! Country-to-continent mapping and the station label parsing shared by the
//! normalization pipeline. The continent tables cover the countries present
//! in the bundled snapshots; anything else maps to "Other".

const ASIA: &[&str] = &[
    "Bangladesh",
    "Pakistan",
    "India",
    "China",
    "Nepal",
    "Bahrain",
    "Kuwait",
    "United Arab Emirates",
    "Tajikistan",
    "Kyrgyzstan",
    "Laos",
    "Uzbekistan",
    "Mongolia",
    "Burma",
    "Iran",
    "Iraq",
    "Turkmenistan",
    "Kazakhstan",
    "Thailand",
    "North Korea",
    "Sri Lanka",
    "Lebanon",
    "Azerbaijan",
    "Vietnam",
    "Philippines",
    "Indonesia",
    "Saudi Arabia",
    "Israel",
    "Japan",
];

const AFRICA: &[&str] = &[
    "Egypt",
    "Rwanda",
    "Cameroon",
    "Congo Kinshasa",
    "Nigeria",
    "Uganda",
    "Ethiopia",
    "Gabon",
    "Cote Divoire",
    "Senegal",
    "Benin",
    "Ghana",
    "Madagascar",
    "Gambia",
    "South Sudan",
];

const EUROPE: &[&str] = &[
    "Bosnia and Herzegovina",
    "Macedonia",
    "Turkey",
    "Montenegro",
    "Serbia",
    "Russian Federation",
    "Poland",
    "Belgium",
    "Italy",
    "Netherlands",
    "France",
    "United Kingdom",
    "Germany",
    "Finland",
    "Ireland",
    "Switzerland",
    "Denmark",
    "Latvia",
];

const NORTH_AMERICA: &[&str] = &[
    "United States of America",
    "Mexico",
    "Guatemala",
    "Haiti",
    "Canada",
    "El Salvador",
];

const SOUTH_AMERICA: &[&str] = &["Peru", "Brazil", "Colombia"];

const OCEANIA: &[&str] = &["Australia", "New Zealand"];

/// Maps a country name to its continent
///
/// Matching is exact. Unknown countries map to "Other" rather than failing,
/// so newly appearing countries still produce usable markers.
pub fn continent_for_country(country: &str) -> &'static str {
    if ASIA.contains(&country) {
        "Asia"
    } else if AFRICA.contains(&country) {
        "Africa"
    } else if EUROPE.contains(&country) {
        "Europe"
    } else if NORTH_AMERICA.contains(&country) {
        "North America"
    } else if SOUTH_AMERICA.contains(&country) {
        "South America"
    } else if OCEANIA.contains(&country) {
        "Oceania"
    } else {
        "Other"
    }
}

/// Canonicalizes long-form country names to their display form
///
/// Station labels spell out "United States of America" and "United Kingdom";
/// markers carry the short forms so filters match the snapshot data.
pub fn simplify_country(country: &str) -> String {
    let lowered = country.to_lowercase();
    if lowered.starts_with("united states") {
        "USA".to_string()
    } else if lowered == "united kingdom" {
        "UK".to_string()
    } else {
        country.to_string()
    }
}

/// Splits a station label into city and country
///
/// Labels are comma-separated, most specific first, like
/// "Anand Vihar, Delhi, India". The city is the first segment and the
/// country the last. A label without commas has no country information
/// and yields "Unknown".
pub fn split_station_label(label: &str) -> (String, String) {
    let parts: Vec<&str> = label.split(',').collect();
    let city = parts[0].trim().to_string();
    let country = if parts.len() > 1 {
        simplify_country(parts[parts.len() - 1].trim())
    } else {
        "Unknown".to_string()
    };
    (city, country)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("India", "Asia")]
    #[test_case("Japan", "Asia")]
    #[test_case("Nigeria", "Africa")]
    #[test_case("Germany", "Europe")]
    #[test_case("United Kingdom", "Europe")]
    #[test_case("Canada", "North America")]
    #[test_case("Brazil", "South America")]
    #[test_case("Australia", "Oceania")]
    #[test_case("Atlantis", "Other")]
    fn test_continent_lookup(country: &str, expected: &str) {
        assert_eq!(continent_for_country(country), expected);
    }

    #[test]
    fn test_continent_lookup_is_case_sensitive() {
        assert_eq!(continent_for_country("india"), "Other");
    }

    #[test]
    fn test_simplify_united_states_variants() {
        assert_eq!(simplify_country("United States of America"), "USA");
        assert_eq!(simplify_country("United States"), "USA");
        assert_eq!(simplify_country("united states"), "USA");
    }

    #[test]
    fn test_simplify_united_kingdom() {
        assert_eq!(simplify_country("United Kingdom"), "UK");
        assert_eq!(simplify_country("UNITED KINGDOM"), "UK");
    }

    #[test]
    fn test_simplify_leaves_other_countries_alone() {
        assert_eq!(simplify_country("India"), "India");
        assert_eq!(simplify_country("France"), "France");
    }

    #[test]
    fn test_split_full_label() {
        let (city, country) = split_station_label("Anand Vihar, Delhi, India");
        assert_eq!(city, "Anand Vihar");
        assert_eq!(country, "India");
    }

    #[test]
    fn test_split_label_simplifies_country() {
        let (city, country) = split_station_label("Los Angeles, United States of America");
        assert_eq!(city, "Los Angeles");
        assert_eq!(country, "USA");
    }

    #[test]
    fn test_split_label_without_country() {
        let (city, country) = split_station_label("Ulaanbaatar");
        assert_eq!(city, "Ulaanbaatar");
        assert_eq!(country, "Unknown");
    }

    #[test]
    fn test_split_label_trims_whitespace() {
        let (city, country) = split_station_label("  Pune ,  India ");
        assert_eq!(city, "Pune");
        assert_eq!(country, "India");
    }
}
