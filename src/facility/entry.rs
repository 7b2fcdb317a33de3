//! Per-state facility record
//!
//! This module contains the StateEntry struct holding the two ordered facility
//! lists recorded for one state.

use crate::types::FacilityCategory;
use serde::{Deserialize, Serialize};

/// Facility names recorded for a single state
///
/// Both lists keep the order in which names were authored; the order is
/// presentational and carries no ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateEntry {
    /// Major health systems and hospital networks with a presence in the state
    pub large: Vec<String>,
    /// Smaller practices and clinics in the state
    pub small: Vec<String>,
}

impl StateEntry {
    /// Create a new entry from both lists
    pub fn new(large: Vec<String>, small: Vec<String>) -> Self {
        Self { large, small }
    }

    /// Create an entry with both lists empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_static(large: &[&str], small: &[&str]) -> Self {
        Self {
            large: large.iter().map(|name| name.to_string()).collect(),
            small: small.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Get the list for a category
    pub fn facilities(&self, category: FacilityCategory) -> &[String] {
        match category {
            FacilityCategory::Large => &self.large,
            FacilityCategory::Small => &self.small,
        }
    }

    /// Check whether both lists are empty
    pub fn is_empty(&self) -> bool {
        self.large.is_empty() && self.small.is_empty()
    }

    /// Total number of facilities across both lists
    pub fn facility_count(&self) -> usize {
        self.large.len() + self.small.len()
    }

    /// Check whether a facility name appears in either list
    pub fn contains(&self, name: &str) -> bool {
        self.large.iter().chain(self.small.iter()).any(|n| n == name)
    }

    /// Validate that every facility name is non-empty
    pub fn validate(&self) -> Result<(), String> {
        for category in FacilityCategory::ALL {
            if let Some(pos) = self.facilities(category).iter().position(|n| n.trim().is_empty()) {
                return Err(format!("{} facility at position {} has an empty name", category, pos));
            }
        }
        Ok(())
    }
}
