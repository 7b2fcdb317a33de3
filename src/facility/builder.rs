//! Facility table builder
//!
//! This module builds a FacilityRegistry from the two CSV exports the table is
//! maintained in:
//!
//! - **Large facilities**: a matrix with health system names across the second
//!   row (from the fourth column on) and one row per state below, where a count
//!   greater than zero places the system in that state's `large` list.
//! - **Small facilities**: one row per practice with `Name` and `State`
//!   (postal abbreviation) columns.

use crate::directory::DirectoryResult;
use crate::facility::entry::StateEntry;
use crate::facility::registry::FacilityRegistry;
use crate::facility::states;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Default cap on small facility names kept per state
pub const DEFAULT_MAX_SMALL: usize = 6;

/// Column where health system names and per-state counts begin in the large CSV
const FIRST_SYSTEM_COLUMN: usize = 3;

/// Row holding health system names in the large CSV
const SYSTEM_NAME_ROW: usize = 1;

/// First per-state row in the large CSV
const FIRST_STATE_ROW: usize = 3;

/// One row of the small facilities CSV
#[derive(Debug, Deserialize)]
struct SmallFacilityRow {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "State", default)]
    state: Option<String>,
}

/// Ordered working set of entries while the CSVs are merged
#[derive(Debug, Default)]
struct TableDraft {
    states: Vec<(String, StateEntry)>,
    state_index: HashMap<String, usize>,
}

impl TableDraft {
    fn entry_mut(&mut self, state: &str) -> &mut StateEntry {
        let idx = match self.state_index.get(state) {
            Some(&idx) => idx,
            None => {
                let idx = self.states.len();
                self.state_index.insert(state.to_string(), idx);
                self.states.push((state.to_string(), StateEntry::empty()));
                idx
            }
        };
        &mut self.states[idx].1
    }
}

/// Builds a facility table from the large and small CSV exports
#[derive(Debug, Clone)]
pub struct TableBuilder {
    /// Maximum small facility names kept per state
    pub max_small: usize,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self { max_small: DEFAULT_MAX_SMALL }
    }
}

impl TableBuilder {
    /// Create a new builder with the default small facility cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of small facility names kept per state
    pub fn with_max_small(mut self, max_small: usize) -> Self {
        self.max_small = max_small;
        self
    }

    /// Build a table from the two CSV files
    pub fn build_from_paths<P, Q>(&self, large_path: P, small_path: Q) -> DirectoryResult<FacilityRegistry>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let large_path = large_path.as_ref();
        let small_path = small_path.as_ref();
        info!(
            large = %large_path.display(),
            small = %small_path.display(),
            "Building facility table from CSV"
        );

        self.build_from_readers(File::open(large_path)?, File::open(small_path)?)
    }

    /// Build a table from readers over the two CSV documents
    pub fn build_from_readers<L: Read, S: Read>(&self, large: L, small: S) -> DirectoryResult<FacilityRegistry> {
        let mut draft = TableDraft::default();
        self.load_large_facilities(large, &mut draft)?;
        self.load_small_facilities(small, &mut draft)?;

        for (_, entry) in &mut draft.states {
            entry.small.truncate(self.max_small);
        }

        let registry = FacilityRegistry::from_entries(draft.states)?;
        info!(states = registry.len(), max_small = self.max_small, "Facility table built");
        Ok(registry)
    }

    fn load_large_facilities<R: Read>(&self, reader: R, draft: &mut TableDraft) -> DirectoryResult<()> {
        let mut csv_reader =
            csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);

        let mut rows: Vec<csv::StringRecord> = Vec::new();
        for record in csv_reader.records() {
            rows.push(record?);
        }

        if rows.len() <= FIRST_STATE_ROW {
            warn!(rows = rows.len(), "Large facilities CSV has no state rows");
            return Ok(());
        }

        // One slot per count column; blank headers leave their column unnamed
        let system_names: Vec<Option<String>> = rows[SYSTEM_NAME_ROW]
            .iter()
            .skip(FIRST_SYSTEM_COLUMN)
            .map(|cell| cell.trim())
            .map(|cell| (!cell.is_empty() && cell != "State Name").then(|| cell.to_string()))
            .collect();
        debug!(
            systems = system_names.iter().flatten().count(),
            "Read large health system names"
        );

        for row in &rows[FIRST_STATE_ROW..] {
            if row.len() <= FIRST_SYSTEM_COLUMN {
                continue;
            }
            let state = row.get(0).unwrap_or_default().trim();
            if state.is_empty() || state == "total" {
                continue;
            }

            let large: Vec<String> = row
                .iter()
                .skip(FIRST_SYSTEM_COLUMN)
                .zip(system_names.iter())
                .filter(|(count, _)| count.trim().parse::<i64>().unwrap_or(0) > 0)
                .filter_map(|(_, name)| name.clone())
                .collect();

            // A repeated state row replaces the earlier one but keeps its position
            *draft.entry_mut(state) = StateEntry::new(large, Vec::new());
        }

        Ok(())
    }

    fn load_small_facilities<R: Read>(&self, reader: R, draft: &mut TableDraft) -> DirectoryResult<()> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let mut skipped = 0usize;
        for row in csv_reader.deserialize::<SmallFacilityRow>() {
            let row = row?;
            let name = row.name.as_deref().unwrap_or_default().trim();
            let abbreviation = row.state.as_deref().unwrap_or_default();

            let state = match states::state_name(abbreviation) {
                Some(state) if !name.is_empty() => state,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            let entry = draft.entry_mut(state);
            if !entry.small.iter().any(|existing| existing == name) {
                entry.small.push(name.to_string());
            }
        }

        if skipped > 0 {
            debug!(skipped, "Skipped small facility rows without a name or known state");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LARGE_CSV: &str = "\
Health System Facility Counts,,,,,
State Name,,,HCA Healthcare,Tenet Healthcare,Northwell
,,,,,
Texas,,,12,3,0
New York,,,0,,7
Delaware,,,0,0,0
total,,,12,3,7
";

    const SMALL_CSV: &str = "\
Name,State,City
Keller Surgical,TX,Keller
Prime MD Geriatrics,tx,Austin
Keller Surgical,TX,Keller
Lattimore of Brownstone,NY,Rochester
,NY,Nowhere
Island Clinic,PR,San Juan
Capitol Practice,DC,Washington
";

    fn build(builder: &TableBuilder) -> FacilityRegistry {
        builder.build_from_readers(LARGE_CSV.as_bytes(), SMALL_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_large_matrix_columns() {
        let registry = build(&TableBuilder::new());

        let texas = registry.get("Texas").unwrap();
        assert_eq!(texas.large, vec!["HCA Healthcare", "Tenet Healthcare"]);

        let new_york = registry.get("New York").unwrap();
        assert_eq!(new_york.large, vec!["Northwell"]);

        assert!(registry.get("Delaware").unwrap().is_empty());
        assert!(!registry.contains("total"));
    }

    #[test]
    fn test_small_rows_merge() {
        let registry = build(&TableBuilder::new());

        let texas = registry.get("Texas").unwrap();
        assert_eq!(texas.small, vec!["Keller Surgical", "Prime MD Geriatrics"]);

        // States first seen in the small CSV are appended after the matrix states
        assert_eq!(
            registry.list_states(),
            vec!["Texas", "New York", "Delaware", "District of Columbia"]
        );
        let dc = registry.get("District of Columbia").unwrap();
        assert!(dc.large.is_empty());
        assert_eq!(dc.small, vec!["Capitol Practice"]);
    }

    #[test]
    fn test_max_small_truncation() {
        let registry = build(&TableBuilder::new().with_max_small(1));
        assert_eq!(registry.get("Texas").unwrap().small, vec!["Keller Surgical"]);

        let registry = build(&TableBuilder::new().with_max_small(0));
        assert!(registry.iter().all(|(_, entry)| entry.small.is_empty()));
    }

    #[test]
    fn test_short_large_csv_yields_only_small_states() {
        let large = "header\nState Name,,,HCA Healthcare\n";
        let registry = TableBuilder::new()
            .build_from_readers(large.as_bytes(), SMALL_CSV.as_bytes())
            .unwrap();
        assert_eq!(registry.list_states(), vec!["Texas", "New York", "District of Columbia"]);
    }

    #[test]
    fn test_repeated_state_row_replaces_entry() {
        let large = "\
x,,,,
State Name,,,A Health,B Health
,,,,
Ohio,,,1,0
Utah,,,1,1
Ohio,,,0,2
";
        let registry = TableBuilder::new()
            .build_from_readers(large.as_bytes(), "Name,State\n".as_bytes())
            .unwrap();
        assert_eq!(registry.list_states(), vec!["Ohio", "Utah"]);
        assert_eq!(registry.get("Ohio").unwrap().large, vec!["B Health"]);
    }

    #[test]
    fn test_blank_system_header_is_ignored() {
        let large = "\
x,,,,,
State Name,,,A Health, ,C Health
,,,,,
Ohio,,,1,1,1
Utah,,,0,3,0
";
        let registry = TableBuilder::new()
            .build_from_readers(large.as_bytes(), "Name,State\n".as_bytes())
            .unwrap();
        assert_eq!(registry.get("Ohio").unwrap().large, vec!["A Health", "C Health"]);
        assert!(registry.get("Utah").unwrap().large.is_empty());
    }

    #[test]
    fn test_default_max_small() {
        assert_eq!(TableBuilder::new().max_small, DEFAULT_MAX_SMALL);
        assert_eq!(DEFAULT_MAX_SMALL, 6);
    }
}
