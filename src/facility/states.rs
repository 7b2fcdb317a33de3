//! U.S. postal abbreviation mapping
//! Maps two-letter abbreviations to the full state names used as table keys

use std::collections::HashMap;
use std::sync::LazyLock;

/// Abbreviation to full state name, including the District of Columbia
pub static STATE_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("AL", "Alabama");
    m.insert("AK", "Alaska");
    m.insert("AZ", "Arizona");
    m.insert("AR", "Arkansas");
    m.insert("CA", "California");
    m.insert("CO", "Colorado");
    m.insert("CT", "Connecticut");
    m.insert("DE", "Delaware");
    m.insert("DC", "District of Columbia");
    m.insert("FL", "Florida");
    m.insert("GA", "Georgia");
    m.insert("HI", "Hawaii");
    m.insert("ID", "Idaho");
    m.insert("IL", "Illinois");
    m.insert("IN", "Indiana");
    m.insert("IA", "Iowa");
    m.insert("KS", "Kansas");
    m.insert("KY", "Kentucky");
    m.insert("LA", "Louisiana");
    m.insert("ME", "Maine");
    m.insert("MD", "Maryland");
    m.insert("MA", "Massachusetts");
    m.insert("MI", "Michigan");
    m.insert("MN", "Minnesota");
    m.insert("MS", "Mississippi");
    m.insert("MO", "Missouri");
    m.insert("MT", "Montana");
    m.insert("NE", "Nebraska");
    m.insert("NV", "Nevada");
    m.insert("NH", "New Hampshire");
    m.insert("NJ", "New Jersey");
    m.insert("NM", "New Mexico");
    m.insert("NY", "New York");
    m.insert("NC", "North Carolina");
    m.insert("ND", "North Dakota");
    m.insert("OH", "Ohio");
    m.insert("OK", "Oklahoma");
    m.insert("OR", "Oregon");
    m.insert("PA", "Pennsylvania");
    m.insert("RI", "Rhode Island");
    m.insert("SC", "South Carolina");
    m.insert("SD", "South Dakota");
    m.insert("TN", "Tennessee");
    m.insert("TX", "Texas");
    m.insert("UT", "Utah");
    m.insert("VT", "Vermont");
    m.insert("VA", "Virginia");
    m.insert("WA", "Washington");
    m.insert("WV", "West Virginia");
    m.insert("WI", "Wisconsin");
    m.insert("WY", "Wyoming");

    m
});

/// Full state name for a postal abbreviation (case-insensitive)
pub fn state_name(abbreviation: &str) -> Option<&'static str> {
    STATE_NAMES.get(abbreviation.trim().to_uppercase().as_str()).copied()
}

/// Postal abbreviation for a full state name (exact match)
pub fn abbreviation(state: &str) -> Option<&'static str> {
    STATE_NAMES.iter().find(|(_, name)| **name == state).map(|(abbr, _)| *abbr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_abbreviation() {
        assert_eq!(state_name("NY"), Some("New York"));
        assert_eq!(state_name("tx"), Some("Texas"));
        assert_eq!(state_name(" dc "), Some("District of Columbia"));
    }

    #[test]
    fn test_unknown_abbreviation() {
        assert_eq!(state_name("PR"), None);
        assert_eq!(state_name(""), None);
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(abbreviation("New Hampshire"), Some("NH"));
        assert_eq!(abbreviation("new hampshire"), None);
    }

    #[test]
    fn test_table_size() {
        assert_eq!(STATE_NAMES.len(), 51);
    }
}
