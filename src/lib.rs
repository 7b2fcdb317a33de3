//! Facility Directory
//!
//! A read-only directory of healthcare facilities by U.S. state. Each state maps
//! to two ordered lists of facility names: `large` health systems and hospital
//! networks, and `small` practices and clinics.
//!
//! # Overview
//!
//! The built-in table covers all 50 states in alphabetical order (Alabama through
//! Wyoming). It is constructed once on first use and never modified, so it can be
//! shared freely across threads. Lookups are exact and case-sensitive; a name
//! that is not a key of the table is reported as not found rather than treated as
//! an empty record.
//!
//! ## Key Features
//!
//! - **Lookup**: Entry by state name, state listing in table order, one list by category
//! - **Table Builder**: Regenerate a table from the large/small CSV exports
//! - **Export**: JSON keyed by state name, or a JavaScript constant declaration
//! - **Statistics**: Per-category totals, empty states, most widespread systems
//!
//! ## Quick Start
//!
//! ```rust
//! use facility_directory::*;
//!
//! let delaware = get("Delaware")?;
//! assert!(delaware.large.is_empty() && delaware.small.is_empty());
//!
//! let states = list_states();
//! assert_eq!(states.len(), 50);
//! assert_eq!(states[0], "Alabama");
//!
//! let large = list_facilities("California", "large")?;
//! assert!(large.iter().any(|name| name == "Tenet Healthcare"));
//!
//! assert!(matches!(list_facilities("Texas", "medium"), Err(DirectoryError::InvalidCategory(_))));
//! # Ok::<(), DirectoryError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`facility`]: State entries, the facility registry, CSV builder, statistics
//! - [`types`]: Facility category, output format, and configuration
//! - [`directory`]: Error type and logging setup
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod directory;
pub mod facility;
pub mod types;

// Errors and logging
pub use directory::{DirectoryError, DirectoryResult, LoggingConfig};

// Facility table
pub use facility::{FacilityRegistry, StateEntry, TableBuilder, TableStatistics};

// Enums and configuration
pub use types::{
    CliArgs, Command, ConfigError, ConfigValidationError, DirectoryConfig, FacilityCategory,
    OutputFormat,
};

/// Get the built-in entry for a state
pub fn get(state: &str) -> DirectoryResult<&'static StateEntry> {
    FacilityRegistry::builtin().get(state)
}

/// All state names in the built-in table, in table order
pub fn list_states() -> Vec<&'static str> {
    FacilityRegistry::builtin().list_states()
}

/// Get one built-in facility list for a state, selecting the category by name
pub fn list_facilities(state: &str, category: &str) -> DirectoryResult<&'static [String]> {
    FacilityRegistry::builtin().list_facilities(state, category)
}
