/// Countries the standings page appends to athlete display names.
/// Scanned in order with no early exit; the last entry found wins.
const COUNTRIES: &[&str] = &[
    "United States",
    "South Africa",
    "Australia",
    "France",
    "Brazil",
    "Hawaii",
    "Portugal",
    "New Zealand",
    "Japan",
    "Ireland",
    "Spain",
    "Fiji",
    "Italy",
    "French Polynesia",
    "Indonesia",
];

/// Status tags appended to athletes who were replaced, retired, injured
/// or withdrawn mid-season.
const STATUS_TAGS: &[&str] = &[" (REP)", " (RET)", " (INJ)", " (WDN)"];

/// Strip the embedded country and status tag from a scraped display name.
/// Returns the trimmed input unchanged when neither is present.
pub fn normalize_name(raw: &str) -> String {
    let mut country = "";
    for &candidate in COUNTRIES {
        if raw.contains(candidate) {
            country = candidate;
        }
    }

    let mut tag = "";
    for &candidate in STATUS_TAGS {
        if raw.contains(candidate) {
            tag = candidate;
        }
    }

    let mut name = raw.to_string();
    if !country.is_empty() {
        name = name.replace(country, "");
    }
    if !tag.is_empty() {
        name = name.replace(tag, "");
    }
    name.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_country_and_status_tag() {
        assert_eq!(normalize_name("Italo Ferreira Brazil (INJ)"), "Italo Ferreira");
    }

    #[test]
    fn strips_country_alone() {
        assert_eq!(normalize_name("Jordy Smith South Africa"), "Jordy Smith");
    }

    #[test]
    fn strips_status_tag_alone() {
        assert_eq!(normalize_name("John John Florence (WDN)"), "John John Florence");
    }

    #[test]
    fn plain_name_passes_through_trimmed() {
        assert_eq!(normalize_name("  Mick Fanning "), "Mick Fanning");
    }

    #[test]
    fn later_country_in_list_wins_when_two_are_embedded() {
        // Only the country matched last in the scan order is removed.
        // "Fiji" sits after "United States" in the list, so it wins.
        assert_eq!(
            normalize_name("John Doe United States Fiji"),
            "John Doe United States"
        );
    }

    #[test]
    fn country_substring_inside_a_real_name_is_still_stripped() {
        // Accepted source ambiguity: the scan cannot tell a country apart
        // from a name that happens to contain one.
        assert_eq!(normalize_name("Bede Durbidge Australia"), "Bede Durbidge");
    }
}
