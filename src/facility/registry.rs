//! Facility registry and state lookup
//!
//! This module contains the FacilityRegistry struct: an ordered, read-only table
//! of state entries with a hash index for direct lookup by state name, plus the
//! process-wide built-in table and JSON/JavaScript import and export.

use crate::directory::{DirectoryError, DirectoryResult};
use crate::facility::data::FACILITY_BY_STATE;
use crate::facility::entry::StateEntry;
use crate::types::FacilityCategory;
use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

/// Variable name used when the table is emitted as JavaScript
pub const JAVASCRIPT_BINDING: &str = "FACILITY_BY_STATE";

/// Number of large health systems reported by [`TableStatistics::most_widespread_large`]
pub const TOP_LARGE_SYSTEMS: usize = 5;

static BUILTIN: LazyLock<FacilityRegistry> = LazyLock::new(|| {
    let mut registry = FacilityRegistry::new();
    for record in FACILITY_BY_STATE {
        let inserted =
            registry.insert(record.state, StateEntry::from_static(record.large, record.small));
        debug_assert!(inserted.is_ok(), "duplicate built-in state {}", record.state);
    }
    registry
});

/// An ordered table of state entries with lookup by exact state name
#[derive(Debug, Clone, Default)]
pub struct FacilityRegistry {
    /// Entries in authored order
    states: Vec<(String, StateEntry)>,
    /// Quick lookup map from state name to index
    state_index: HashMap<String, usize>,
}

impl FacilityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table, constructed on first access and never modified
    pub fn builtin() -> &'static FacilityRegistry {
        &BUILTIN
    }

    /// Build a registry from `(state, entry)` pairs, keeping their order
    ///
    /// Fails with [`DirectoryError::InvalidTable`] on a duplicate or empty state
    /// name, or on an empty facility name.
    pub fn from_entries<I, S>(entries: I) -> DirectoryResult<Self>
    where
        I: IntoIterator<Item = (S, StateEntry)>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (state, entry) in entries {
            registry.insert(state, entry)?;
        }
        registry.validate()?;
        Ok(registry)
    }

    pub(crate) fn insert(&mut self, state: impl Into<String>, entry: StateEntry) -> DirectoryResult<()> {
        let state = state.into();
        if state.trim().is_empty() {
            return Err(DirectoryError::invalid_table("state name must not be empty"));
        }
        if self.state_index.contains_key(&state) {
            return Err(DirectoryError::invalid_table(format!("duplicate state: {}", state)));
        }

        self.state_index.insert(state.clone(), self.states.len());
        self.states.push((state, entry));
        Ok(())
    }

    /// Get the entry for a state
    ///
    /// The match is exact and case-sensitive; there is no fallback for names
    /// that are not keys of the table.
    pub fn get(&self, state: &str) -> DirectoryResult<&StateEntry> {
        self.state_index
            .get(state)
            .and_then(|&idx| self.states.get(idx))
            .map(|(_, entry)| entry)
            .ok_or_else(|| {
                debug!(state, "state lookup missed");
                DirectoryError::not_found(state)
            })
    }

    /// Check if a state is a key of the table
    pub fn contains(&self, state: &str) -> bool {
        self.state_index.contains_key(state)
    }

    /// All state names in table order
    pub fn list_states(&self) -> Vec<&str> {
        self.states.iter().map(|(state, _)| state.as_str()).collect()
    }

    /// Get one facility list for a state, selecting the category by name
    ///
    /// The state is resolved before the category, so an unknown state reports
    /// [`DirectoryError::NotFound`] even when the category is also invalid.
    pub fn list_facilities(&self, state: &str, category: &str) -> DirectoryResult<&[String]> {
        let entry = self.get(state)?;
        let category = category
            .parse::<FacilityCategory>()
            .map_err(|_| DirectoryError::invalid_category(category))?;
        Ok(entry.facilities(category))
    }

    /// Get one facility list for a state
    pub fn facilities(&self, state: &str, category: FacilityCategory) -> DirectoryResult<&[String]> {
        Ok(self.get(state)?.facilities(category))
    }

    /// Iterate over `(state, entry)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateEntry)> {
        self.states.iter().map(|(state, entry)| (state.as_str(), entry))
    }

    /// Number of states in the table
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check whether the table has no states
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Validate every entry in the registry
    pub fn validate(&self) -> DirectoryResult<()> {
        for (state, entry) in &self.states {
            entry
                .validate()
                .map_err(|e| DirectoryError::invalid_table(format!("{}: {}", state, e)))?;
        }
        Ok(())
    }

    /// States whose large and small lists are both empty
    pub fn empty_states(&self) -> Vec<&str> {
        self.iter().filter(|(_, entry)| entry.is_empty()).map(|(state, _)| state).collect()
    }

    /// States that list a facility name in either category
    pub fn states_with_facility(&self, name: &str) -> Vec<&str> {
        self.iter().filter(|(_, entry)| entry.contains(name)).map(|(state, _)| state).collect()
    }

    /// Get statistics about the table contents
    pub fn statistics(&self) -> TableStatistics {
        let mut total_large = 0;
        let mut total_small = 0;
        let mut empty_states = 0;
        let mut states_without_large = 0;
        let mut states_without_small = 0;

        // First-seen order breaks ties between equally widespread systems
        let mut coverage: Vec<(String, usize)> = Vec::new();
        let mut coverage_index: HashMap<&str, usize> = HashMap::new();

        for (_, entry) in &self.states {
            total_large += entry.large.len();
            total_small += entry.small.len();

            if entry.is_empty() {
                empty_states += 1;
            }
            if entry.large.is_empty() {
                states_without_large += 1;
            }
            if entry.small.is_empty() {
                states_without_small += 1;
            }

            for name in &entry.large {
                match coverage_index.get(name.as_str()) {
                    Some(&idx) => coverage[idx].1 += 1,
                    None => {
                        coverage_index.insert(name.as_str(), coverage.len());
                        coverage.push((name.clone(), 1));
                    }
                }
            }
        }

        let distinct_large_systems = coverage.len();
        coverage.sort_by(|a, b| b.1.cmp(&a.1));
        coverage.truncate(TOP_LARGE_SYSTEMS);

        TableStatistics {
            states: self.states.len(),
            total_large,
            total_small,
            empty_states,
            states_without_large,
            states_without_small,
            distinct_large_systems,
            most_widespread_large: coverage,
        }
    }

    /// Parse a registry from a JSON object keyed by state name
    pub fn from_json_str(json: &str) -> DirectoryResult<Self> {
        let registry: Self = serde_json::from_str(json)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load a registry from a JSON file
    pub fn load_json_file<P: AsRef<Path>>(path: P) -> DirectoryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let registry = Self::from_json_str(&content)?;
        info!(path = %path.display(), states = registry.len(), "Loaded facility table");
        Ok(registry)
    }

    /// Render the registry as pretty-printed JSON
    pub fn to_json_pretty(&self) -> DirectoryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the registry as a JavaScript constant declaration
    pub fn to_javascript(&self) -> DirectoryResult<String> {
        Ok(format!("const {} = {};", JAVASCRIPT_BINDING, self.to_json_pretty()?))
    }

    /// Write the registry to a JSON file
    pub fn write_json_file<P: AsRef<Path>>(&self, path: P) -> DirectoryResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_pretty()?)?;
        info!(path = %path.display(), states = self.len(), "Wrote facility table");
        Ok(())
    }
}

impl PartialEq for FacilityRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.states == other.states
    }
}

impl Eq for FacilityRegistry {}

impl Serialize for FacilityRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.states.len()))?;
        for (state, entry) in &self.states {
            map.serialize_entry(state, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FacilityRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RegistryVisitor)
    }
}

struct RegistryVisitor;

impl<'de> Visitor<'de> for RegistryVisitor {
    type Value = FacilityRegistry;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map from state name to {\"large\": [...], \"small\": [...]}")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut registry = FacilityRegistry::new();
        while let Some((state, entry)) = access.next_entry::<String, StateEntry>()? {
            registry.insert(state, entry).map_err(A::Error::custom)?;
        }
        Ok(registry)
    }
}

/// Statistics about the contents of a facility table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStatistics {
    /// Number of states in the table
    pub states: usize,
    /// Total large facility entries across all states
    pub total_large: usize,
    /// Total small facility entries across all states
    pub total_small: usize,
    /// States with both lists empty
    pub empty_states: usize,
    /// States with no large facilities
    pub states_without_large: usize,
    /// States with no small facilities
    pub states_without_small: usize,
    /// Number of distinct large facility names
    pub distinct_large_systems: usize,
    /// Large facility names present in the most states, with their state counts
    pub most_widespread_large: Vec<(String, usize)>,
}

impl TableStatistics {
    /// Average number of large facilities per state
    pub fn average_large_per_state(&self) -> f64 {
        if self.states == 0 {
            0.0
        } else {
            self.total_large as f64 / self.states as f64
        }
    }

    /// Average number of small facilities per state
    pub fn average_small_per_state(&self) -> f64 {
        if self.states == 0 {
            0.0
        } else {
            self.total_small as f64 / self.states as f64
        }
    }

    /// Percentage of states with both lists empty
    pub fn empty_state_percentage(&self) -> f64 {
        if self.states == 0 {
            0.0
        } else {
            (self.empty_states as f64 / self.states as f64) * 100.0
        }
    }
}
