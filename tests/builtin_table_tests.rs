//! Tests for the built-in facility table
//!
//! These tests pin the shape and a few known records of the table shipped with
//! the crate.

use facility_directory::facility::FacilityRegistry;
use facility_directory::types::FacilityCategory;
use facility_directory::DirectoryError;
use std::collections::HashSet;

#[test]
fn test_every_state_has_both_lists_with_named_facilities() {
    let registry = FacilityRegistry::builtin();
    for state in registry.list_states() {
        let entry = registry.get(state).unwrap();
        for name in entry.large.iter().chain(entry.small.iter()) {
            assert!(!name.trim().is_empty(), "{} has an empty facility name", state);
        }
    }
    assert!(registry.validate().is_ok());
}

#[test]
fn test_fifty_unique_states_in_authored_order() {
    let states = FacilityRegistry::builtin().list_states();
    assert_eq!(states.len(), 50);

    let unique: HashSet<&str> = states.iter().copied().collect();
    assert_eq!(unique.len(), 50);

    assert_eq!(states.first(), Some(&"Alabama"));
    assert_eq!(states.last(), Some(&"Wyoming"));

    let mut sorted = states.clone();
    sorted.sort_unstable();
    assert_eq!(states, sorted, "authored order is alphabetical");

    assert!(!states.contains(&"District of Columbia"));
}

#[test]
fn test_multi_word_state_names() {
    let registry = FacilityRegistry::builtin();
    for state in ["New York", "New Hampshire", "North Dakota", "West Virginia", "Rhode Island"] {
        assert!(registry.contains(state), "{} missing", state);
    }
}

#[test]
fn test_empty_states() {
    let registry = FacilityRegistry::builtin();

    let delaware = registry.get("Delaware").unwrap();
    assert!(delaware.large.is_empty());
    assert!(delaware.small.is_empty());

    assert_eq!(registry.empty_states(), vec!["Delaware", "South Dakota", "Vermont"]);
}

#[test]
fn test_california_large_facilities() {
    let california = FacilityRegistry::builtin().get("California").unwrap();
    assert_eq!(california.large.len(), 9);
    assert!(california.large.iter().any(|n| n == "HCA Healthcare"));
    assert!(california.large.iter().any(|n| n == "Tenet Healthcare"));
    assert_eq!(california.large[0], "HCA Healthcare");
}

#[test]
fn test_texas_entry() {
    let registry = FacilityRegistry::builtin();

    let large = registry.facilities("Texas", FacilityCategory::Large).unwrap();
    assert_eq!(
        large,
        [
            "HCA Healthcare",
            "Tenet Healthcare",
            "Community Health Systems Inc",
            "Vibra Healthcare",
            "Baylor Scott & White Medical Center - Frisco",
        ]
    );

    let small = registry.list_facilities("Texas", "small").unwrap();
    assert_eq!(small.len(), 6);
    assert_eq!(small[0], "Keller Surgical");

    for category in ["medium", "Large", " small "] {
        assert!(matches!(
            registry.list_facilities("Texas", category),
            Err(DirectoryError::InvalidCategory(_))
        ));
    }
}

#[test]
fn test_lookup_is_exact() {
    let registry = FacilityRegistry::builtin();
    assert!(matches!(registry.get("NotAState"), Err(DirectoryError::NotFound(_))));
    assert!(matches!(registry.get("texas"), Err(DirectoryError::NotFound(_))));
    assert!(matches!(registry.get("Texas "), Err(DirectoryError::NotFound(_))));
    assert!(matches!(registry.get("TX"), Err(DirectoryError::NotFound(_))));
    assert!(matches!(registry.get(""), Err(DirectoryError::NotFound(_))));
}

#[test]
fn test_repeated_lookups_are_equal() {
    let registry = FacilityRegistry::builtin();
    for state in registry.list_states() {
        let first = registry.get(state).unwrap().clone();
        let second = registry.get(state).unwrap().clone();
        assert_eq!(first, second);
    }
    assert_eq!(registry.list_states(), registry.list_states());
}

#[test]
fn test_builtin_statistics() {
    let stats = FacilityRegistry::builtin().statistics();
    assert_eq!(stats.states, 50);
    assert_eq!(stats.total_large, 126);
    assert_eq!(stats.total_small, 163);
    assert_eq!(stats.empty_states, 3);
    assert_eq!(stats.states_without_large, 7);
    assert_eq!(stats.states_without_small, 8);
    assert_eq!(stats.distinct_large_systems, 76);

    let top: Vec<(&str, usize)> = stats
        .most_widespread_large
        .iter()
        .map(|(name, count)| (name.as_str(), *count))
        .collect();
    assert_eq!(
        top[..4],
        [
            ("HCA Healthcare", 21),
            ("Community Health Systems Inc", 15),
            ("Tenet Healthcare", 9),
            ("Vibra Healthcare", 3),
        ]
    );
    assert_eq!(stats.most_widespread_large.len(), 5);
    assert_eq!(stats.empty_state_percentage(), 6.0);
}

#[test]
fn test_small_lists_respect_default_cap() {
    let registry = FacilityRegistry::builtin();
    assert!(registry.iter().all(|(_, entry)| entry.small.len() <= 6));
}

#[test]
fn test_states_with_facility() {
    let states = FacilityRegistry::builtin().states_with_facility("HCA Healthcare");
    assert_eq!(states.len(), 21);
    assert!(states.contains(&"California"));
    assert!(states.contains(&"Texas"));
}
