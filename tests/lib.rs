// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use facility_directory::*;

mod builtin_table_tests;
mod table_builder_tests;

#[test]
fn test_crate_root_lookups_use_builtin_table() {
    let entry = get("Alaska").unwrap();
    assert_eq!(entry, FacilityRegistry::builtin().get("Alaska").unwrap());
    assert_eq!(entry.large, vec!["HCA Healthcare", "Community Health Systems Inc"]);
    assert_eq!(entry.small, vec!["Empower Physical Therapy"]);

    assert_eq!(list_states(), FacilityRegistry::builtin().list_states());
    assert_eq!(list_facilities("Alaska", "small").unwrap(), ["Empower Physical Therapy"]);
}

#[test]
fn test_error_kinds() {
    assert!(matches!(get("NotAState"), Err(DirectoryError::NotFound(s)) if s == "NotAState"));
    assert!(matches!(
        list_facilities("Texas", "medium"),
        Err(DirectoryError::InvalidCategory(c)) if c == "medium"
    ));
    assert!(matches!(list_facilities("NotAState", "large"), Err(DirectoryError::NotFound(_))));
}

#[test]
fn test_enum_types() {
    for category in FacilityCategory::ALL {
        assert!(!category.to_string().is_empty());
        assert_eq!(category.to_string().parse::<FacilityCategory>().unwrap(), category);
    }

    for format in [OutputFormat::Text, OutputFormat::Json] {
        assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
    }
}

#[test]
fn test_typed_and_named_category_lookups_agree() {
    let registry = FacilityRegistry::builtin();
    for state in registry.list_states() {
        for category in FacilityCategory::ALL {
            assert_eq!(
                registry.facilities(state, category).unwrap(),
                registry.list_facilities(state, category.as_str()).unwrap()
            );
        }
    }
}
