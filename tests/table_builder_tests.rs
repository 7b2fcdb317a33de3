//! Tests for building, exporting, and reloading facility tables
//!
//! These tests drive the CSV builder from files on disk and check that tables
//! written as JSON load back unchanged.

use facility_directory::facility::{FacilityRegistry, StateEntry, TableBuilder};
use facility_directory::DirectoryError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const LARGE_CSV: &str = "\
plg_data - large_facilities,,,,,
State Name,,,HCA Healthcare,Community Health Systems Inc,Vibra Healthcare
,,,facilities,facilities,facilities
Alabama,,,0,4,0
Alaska,,,1,1,0
California,,,30,,2
Delaware,,,0,0,0
total,,,31,5,2
";

const SMALL_CSV: &str = "\
Name,State,Specialty
Vascular Center of Mobile,AL,Vascular
The Myers Institute,al,Surgery
Empower Physical Therapy,AK,PT
Clinic One,CA,
Clinic Two,CA,
Clinic Three,CA,
Clinic Four,CA,
Clinic Five,CA,
Clinic Six,CA,
Clinic Seven,CA,
Clinic One,CA,
";

fn write_fixtures() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let large = dir.path().join("large_facilities.csv");
    let small = dir.path().join("small_facilities.csv");
    fs::write(&large, LARGE_CSV).unwrap();
    fs::write(&small, SMALL_CSV).unwrap();
    (dir, large, small)
}

#[test]
fn test_build_from_files() {
    let (_dir, large, small) = write_fixtures();
    let registry = TableBuilder::new().build_from_paths(&large, &small).unwrap();

    assert_eq!(registry.list_states(), vec!["Alabama", "Alaska", "California", "Delaware"]);

    let alabama = registry.get("Alabama").unwrap();
    assert_eq!(alabama.large, vec!["Community Health Systems Inc"]);
    assert_eq!(alabama.small, vec!["Vascular Center of Mobile", "The Myers Institute"]);

    let california = registry.get("California").unwrap();
    assert_eq!(california.large, vec!["HCA Healthcare", "Vibra Healthcare"]);
    // Seven distinct clinics, capped at six
    assert_eq!(california.small.len(), 6);
    assert_eq!(california.small.last().map(String::as_str), Some("Clinic Six"));

    assert_eq!(registry.get("Delaware").unwrap(), &StateEntry::empty());
}

#[test]
fn test_build_with_custom_cap() {
    let (_dir, large, small) = write_fixtures();
    let registry = TableBuilder::new().with_max_small(2).build_from_paths(&large, &small).unwrap();
    assert_eq!(registry.get("California").unwrap().small, vec!["Clinic One", "Clinic Two"]);
}

#[test]
fn test_build_missing_file() {
    let (dir, large, _small) = write_fixtures();
    let missing = dir.path().join("missing.csv");
    let result = TableBuilder::new().build_from_paths(&large, &missing);
    assert!(matches!(result, Err(DirectoryError::IoError(_))));
}

#[test]
fn test_json_export_and_reload() {
    let (dir, large, small) = write_fixtures();
    let registry = TableBuilder::new().build_from_paths(&large, &small).unwrap();

    let table_path = dir.path().join("table.json");
    registry.write_json_file(&table_path).unwrap();

    let reloaded = FacilityRegistry::load_json_file(&table_path).unwrap();
    assert_eq!(reloaded, registry);
    assert_eq!(reloaded.list_states(), registry.list_states());
}

#[test]
fn test_builtin_export_reloads_identically() {
    let builtin = FacilityRegistry::builtin();
    let json = builtin.to_json_pretty().unwrap();
    let reloaded = FacilityRegistry::from_json_str(&json).unwrap();

    assert_eq!(&reloaded, builtin);
    assert_eq!(reloaded.list_states(), builtin.list_states());
}

#[test]
fn test_builtin_javascript_export() {
    let js = FacilityRegistry::builtin().to_javascript().unwrap();
    assert!(js.starts_with("const FACILITY_BY_STATE = {\n  \"Alabama\": {\n    \"large\": [\n"));
    assert!(js.ends_with("\n};"));
    assert!(js.contains("  \"Vermont\": {\n    \"large\": [],\n    \"small\": []\n  },"));
}

#[test]
fn test_load_rejects_malformed_tables() {
    let dir = tempfile::tempdir().unwrap();

    let not_a_map = dir.path().join("list.json");
    fs::write(&not_a_map, r#"["Texas"]"#).unwrap();
    assert!(matches!(
        FacilityRegistry::load_json_file(&not_a_map),
        Err(DirectoryError::SerializationError(_))
    ));

    let missing_field = dir.path().join("missing.json");
    fs::write(&missing_field, r#"{"Texas": {"large": ["HCA Healthcare"]}}"#).unwrap();
    assert!(matches!(
        FacilityRegistry::load_json_file(&missing_field),
        Err(DirectoryError::SerializationError(_))
    ));

    assert!(matches!(
        FacilityRegistry::load_json_file(dir.path().join("absent.json")),
        Err(DirectoryError::IoError(_))
    ));
}
